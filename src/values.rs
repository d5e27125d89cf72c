//! 컬럼 값 및 기록용(writable) 값 타입 정의
//!
//! `ColumnValue`는 상위 row 이벤트 디코더가 전달하는 원시 셀 값이며,
//! `WritableValue`는 정규화 후 레코드 출력 계층이 받아들이는 형태입니다.
//! 이 모듈은 값을 생성하거나 해석하지 않고 형태만 정의합니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// 원시 컬럼 값 (다양한 MySQL 타입 지원)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValue {
    Null,
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    /// 임의 정밀도 DECIMAL (문자열로 정밀도 보존)
    Decimal(String),
    Bytes(Vec<u8>),
    /// UTC 타임라인 상의 인스턴트
    Timestamp(DateTime<Utc>),
    /// 캘린더 날짜 (자정 인스턴트로 취급)
    Date(NaiveDate),
    Time(String),
    String(String),
    Json(serde_json::Value),
}

impl ColumnValue {
    /// 숫자 값 여부
    pub fn is_numeric(&self) -> bool {
        self.as_writable_number().is_some()
    }

    /// 숫자 값이면 동일 정밀도의 WritableValue로 통과, 아니면 None
    pub fn as_writable_number(&self) -> Option<WritableValue> {
        match self {
            ColumnValue::Int8(v) => Some(WritableValue::Int8(*v)),
            ColumnValue::Int16(v) => Some(WritableValue::Int16(*v)),
            ColumnValue::Int32(v) => Some(WritableValue::Int32(*v)),
            ColumnValue::Int64(v) => Some(WritableValue::Int64(*v)),
            ColumnValue::UInt8(v) => Some(WritableValue::UInt8(*v)),
            ColumnValue::UInt16(v) => Some(WritableValue::UInt16(*v)),
            ColumnValue::UInt32(v) => Some(WritableValue::UInt32(*v)),
            ColumnValue::UInt64(v) => Some(WritableValue::UInt64(*v)),
            ColumnValue::Float(v) => Some(WritableValue::Float(*v)),
            ColumnValue::Double(v) => Some(WritableValue::Double(*v)),
            ColumnValue::Decimal(v) => Some(WritableValue::Decimal(v.clone())),
            _ => None,
        }
    }
}

/// 일반 문자열 변환 (언어 수준의 to-string)
impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Null => write!(f, "NULL"),
            ColumnValue::Int8(v) => write!(f, "{}", v),
            ColumnValue::Int16(v) => write!(f, "{}", v),
            ColumnValue::Int32(v) => write!(f, "{}", v),
            ColumnValue::Int64(v) => write!(f, "{}", v),
            ColumnValue::UInt8(v) => write!(f, "{}", v),
            ColumnValue::UInt16(v) => write!(f, "{}", v),
            ColumnValue::UInt32(v) => write!(f, "{}", v),
            ColumnValue::UInt64(v) => write!(f, "{}", v),
            ColumnValue::Float(v) => write!(f, "{}", v),
            ColumnValue::Double(v) => write!(f, "{}", v),
            ColumnValue::Decimal(v) => write!(f, "{}", v),
            ColumnValue::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            ColumnValue::Timestamp(dt) => write!(f, "{}", dt.to_rfc3339()),
            ColumnValue::Date(d) => write!(f, "{}", d),
            ColumnValue::Time(t) => write!(f, "{}", t),
            ColumnValue::String(s) => write!(f, "{}", s),
            ColumnValue::Json(v) => write!(f, "{}", v),
        }
    }
}

/// 정규화된 기록용 값
///
/// 숫자 변형들은 입력 숫자의 통과(passthrough)이며 절대 문자열화되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WritableValue {
    Null,
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    Decimal(String),
    Text(String),
}

impl WritableValue {
    /// 레코드 출력용 JSON 값으로 변환
    ///
    /// JSON 숫자는 임의 정밀도를 보존하지 못하므로 Decimal은 문자열로 내보냅니다.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            WritableValue::Null => serde_json::Value::Null,
            WritableValue::Int8(v) => json!(v),
            WritableValue::Int16(v) => json!(v),
            WritableValue::Int32(v) => json!(v),
            WritableValue::Int64(v) => json!(v),
            WritableValue::UInt8(v) => json!(v),
            WritableValue::UInt16(v) => json!(v),
            WritableValue::UInt32(v) => json!(v),
            WritableValue::UInt64(v) => json!(v),
            WritableValue::Float(v) => json!(v),
            WritableValue::Double(v) => json!(v),
            WritableValue::Decimal(v) => json!(v),
            WritableValue::Text(s) => json!(s),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, WritableValue::Null)
    }
}
