//! Browser-free core of the portfolio page: content, animation sequences,
//! the contact submission lifecycle and configuration.

pub mod boot;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod manifest;
pub mod reveal;
pub mod scramble;
pub mod scroll;
pub mod spotlight;
pub mod theme;

pub use boot::{BootEvent, BootPhase, BootSequence};
pub use config::{EmailConfig, SiteConfig};
pub use contact::{ContactFlow, ContactMessage, EmailSender, EnvelopeView, SubmissionState};
pub use error::{ConfigError, DeliveryError, ManifestError, SubmitError};
pub use manifest::{asset_links, parse_manifest, AssetLink};
pub use reveal::{Particle, RevealSequence, RevealStage, SeenLatch};
pub use scramble::Scramble;
pub use scroll::Spring;
pub use spotlight::Spotlight;
pub use theme::{Palette, Theme};
