//! 선언된 SQL 타입 코드
//!
//! 컬럼 메타데이터 계층이 전달하는 JDBC 스타일 타입 코드입니다.
//! 정규화 동작을 바꾸는 것은 TIMESTAMP(93) 하나뿐이며,
//! 나머지는 호출자와 로그가 타입을 식별하기 위해 존재합니다.

use serde::{Deserialize, Serialize};

/// JDBC 스타일 SQL 타입 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum SqlTypeCode {
    /// 알 수 없는 타입 코드
    Unknown = 0,
    /// BIGINT
    BigInt = -5,
    /// DECIMAL
    Decimal = 3,
    /// INTEGER
    Integer = 4,
    /// DOUBLE
    Double = 8,
    /// VARCHAR
    VarChar = 12,
    /// DATE
    Date = 91,
    /// TIME
    Time = 92,
    /// TIMESTAMP
    Timestamp = 93,
    /// BLOB
    Blob = 2004,
}

impl SqlTypeCode {
    pub fn from_i32(val: i32) -> Self {
        match val {
            -5 => SqlTypeCode::BigInt,
            3 => SqlTypeCode::Decimal,
            4 => SqlTypeCode::Integer,
            8 => SqlTypeCode::Double,
            12 => SqlTypeCode::VarChar,
            91 => SqlTypeCode::Date,
            92 => SqlTypeCode::Time,
            93 => SqlTypeCode::Timestamp,
            2004 => SqlTypeCode::Blob,
            _ => SqlTypeCode::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i32() {
        assert_eq!(SqlTypeCode::from_i32(93), SqlTypeCode::Timestamp);
        assert_eq!(SqlTypeCode::from_i32(-5), SqlTypeCode::BigInt);
        assert_eq!(SqlTypeCode::from_i32(9999), SqlTypeCode::Unknown);
    }
}
