use cvscore_core::error::CvscoreError;
use serde::Serialize;

pub fn to_string<T: Serialize>(value: &T) -> Result<String, CvscoreError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print<T: Serialize>(value: &T) -> Result<(), CvscoreError> {
    println!("{}", to_string(value)?);
    Ok(())
}
