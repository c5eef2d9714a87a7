use crate::error::TallyDBError;

pub type Result<T> = std::result::Result<T, TallyDBError>;
