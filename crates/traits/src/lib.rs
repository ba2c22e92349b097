pub mod content;
pub mod host;
pub mod localization;
pub mod resource;

pub use content::{IntrinsicContent, TextMeasurer, TextRequest};
pub use host::{HostView, RecordingView, RecordingViewFactory, SharedHostView, ViewFactory};
pub use localization::{IdentityLocalizer, Localizer, MapLocalizer};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
