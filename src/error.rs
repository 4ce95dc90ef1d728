use thiserror::Error;

/// Errors generated when parsing a [Vector2](struct.Vector2.html) from its `"X:<x> Y:<y>"` text form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseVector2Error {
    /// The label of a component could not be found
    #[error("Missing component {axis:?}, expected \"{axis}:<value>\"")]
    MissingComponent {
        /// The axis that was missing, either `'X'` or `'Y'`
        axis: char,
    },

    /// The value of a component is not a valid float
    #[error("Could not parse component {axis:?}: {inner:?}")]
    InvalidComponent {
        /// The axis of the component that failed to parse
        axis: char,
        /// The inner error that occured when parsing the float
        inner: std::num::ParseFloatError,
    },

    /// There was more text after the `Y` component
    #[error("Unexpected input after the Y component: {0:?}")]
    TrailingInput(String),
}
