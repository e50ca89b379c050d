//! Siniestros prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    claims::{
        CLAIM_TYPES, Claim, ClaimPriority, ClaimStats, ClaimStatus, ClaimUpdate, NewClaim, Tone,
    },
    dates::format_date,
    documents::{DOCUMENT_TYPES, Document, DocumentId, DocumentKind, OcrResult, Viewer},
    guards::{GuardDecision, check, public_only, requires_auth},
    listing::{Page, PageError, PageRequest, Searchable, filter, paginate},
    routes::{Access, ClaimId, Route},
    session::{AccessToken, AuthState, Session},
    users::{Registration, RegistrationForm, User, UserKind},
    validation::ValidationError,
};
