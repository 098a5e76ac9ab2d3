use crate::PlaneStegoError;

pub type Result<T> = std::result::Result<T, PlaneStegoError>;
