//! Browser-independent pieces of the Dhyan site: the carousel controller,
//! scroll choreography, content normalization and the article/contact rules
//! shared by the backend and the Yew frontend.

pub mod article;
pub mod audio;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod scroll;

pub use article::{Article, ArticleSummary};
pub use carousel::{CarouselController, IndexState, InitialIndex, Mode, SectionTiming};
pub use contact::{ContactError, ContactRequest, ContactResponse};
pub use content::{ContentError, Document, Section};
