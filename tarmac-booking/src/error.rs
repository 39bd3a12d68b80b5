/// Purchase-flow failures, reported to the caller for display. The first
/// invalid field wins, in the order the form presents them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("'{0}' is not a valid DNI, or its check letter does not match")]
    InvalidDni(String),

    #[error("the passenger name '{0}' is too short")]
    NameTooShort(String),

    #[error("'{0}' is not a valid e-mail address")]
    InvalidEmail(String),

    #[error("a payment method must be selected")]
    PaymentMethodRequired,

    #[error("the comment is {len} characters long, the maximum is {max}")]
    CommentTooLong { len: usize, max: usize },

    #[error("no flight with code '{0}' was found")]
    UnknownFlight(String),
}
