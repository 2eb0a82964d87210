#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Tried to use an identifier with no binding.
    UnknownIdentifier {
        /// The identifier name.
        name: String,
    },
    /// Tried to access a property the value does not have.
    UnknownProperty {
        /// The property name.
        name: String,
        /// The class of the accessed value.
        on:   String,
    },
    /// Tried to invoke a value that is not callable.
    NotCallable {
        /// The class of the value that was invoked.
        found: String,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Tried to register an overload under an unknown operation name.
    UnknownOperation {
        /// The name that failed to resolve.
        name: String,
    },
    /// Tried to access a sequence element outside the valid bounds.
    IndexOutOfBounds {
        /// The length of the sequence.
        len:   usize,
        /// The index that was actually requested.
        found: i64,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// A slice used a step of zero.
    SliceStepZero,
    /// The sliced value supports no slicing overload.
    SliceNotSupported {
        /// The class of the sliced value.
        class: String,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A value without a hash identity was used as a set element.
    NotHashable {
        /// The class of the offending value.
        class: String,
    },
    /// A numeric value was too large to be converted safely.
    LiteralTooLarge,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name } => {
                write!(f, "Evaluation error: Unknown identifier '{name}'.")
            },

            Self::UnknownProperty { name, on } => {
                write!(f, "Evaluation error: Unknown property '{name}' on {on}.")
            },

            Self::NotCallable { found } => {
                write!(f, "Evaluation error: A {found} value is not callable.")
            },

            Self::TypeError { details } => write!(f, "Evaluation error: Type error: {details}."),

            Self::UnknownOperation { name } => {
                write!(f, "Evaluation error: Unknown operation '{name}'.")
            },

            Self::IndexOutOfBounds { len, found } => write!(f,
                                                            "Evaluation error: Index {found} is out of bounds for length {len}."),

            Self::DivisionByZero => write!(f, "Evaluation error: Division by zero."),

            Self::Overflow => write!(f,
                                     "Evaluation error: Integer overflow while computing the result."),

            Self::SliceStepZero => write!(f, "Evaluation error: Slice step cannot be zero."),

            Self::SliceNotSupported { class } => {
                write!(f, "Evaluation error: A {class} value does not support slicing.")
            },

            Self::InvalidArgument { details } => {
                write!(f, "Evaluation error: Invalid argument: {details}.")
            },

            Self::NotHashable { class } => {
                write!(f, "Evaluation error: A {class} value cannot be a set element.")
            },

            Self::LiteralTooLarge => {
                write!(f, "Evaluation error: Value is too large to be represented safely.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
