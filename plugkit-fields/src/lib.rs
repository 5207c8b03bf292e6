//! Registration-form fields
//!
//! `plugkit-fields` turns declarative field configuration into form fields that
//! render through a template and validate submitted values.
//!
//! # Architecture
//!
//! - **Typed properties**: each variant has a config struct whose serialized
//!   form is its default table; unknown configuration keys are kept as extra
//!   template properties
//! - **Explicit templates**: each variant names its template; the template is
//!   compiled from a [`TemplateRegistry`](plugkit_templating::TemplateRegistry)
//!   when the field is built, so a missing template fails early
//! - **Threaded errors**: validation never fails with `Err`; failures are
//!   appended to an [`ErrorCollection`] that is passed through every field
//! - **Host events**: [`RegistrationForm`] binds fields to the host's
//!   "render form" and "registration errors" events

pub mod error;
pub mod factory;
pub mod field;
pub mod hooks;
pub mod properties;
pub mod validation;
pub mod variants;

pub use error::{FieldsError, Result};
pub use factory::FieldFactory;
pub use field::{Field, FieldPhase, FieldVariant, FormField};
pub use hooks::{HostEvent, RegistrationForm, Submission};
pub use properties::PropertyBag;
pub use validation::{ErrorCollection, ValidationError};
pub use variants::{
    CheckboxConfig, CheckboxField, CommonProps, EmailConfig, EmailField, SelectConfig,
    SelectField, SelectOption, TextConfig, TextField, TextareaConfig, TextareaField,
};

pub use plugkit_templating::Properties;
