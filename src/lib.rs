//! MySQL CDC 컬럼 값 정규화 라이브러리
//!
//! 이 라이브러리는 binlog row 이벤트에서 디코딩된 원시 컬럼 값을
//! 레코드 출력 계층이 받아들이는 기록용 값으로 변환합니다.
//! 주요 기능:
//! - 숫자 값 통과 (정밀도 보존, 문자열화 금지)
//! - 바이트 열 디코딩 (명시적 인코딩 설정)
//! - 타임스탬프/날짜 포맷팅 (명시적 source zone, 기본 GMT)
//! - 행 단위 JSON 변환

pub mod error;
pub mod normalize;
pub mod sql_type;
pub mod values;

pub use error::{NormalizeError, Result};
pub use normalize::{ColumnInfo, TextEncoding, ValueNormalizer};
pub use sql_type::SqlTypeCode;
pub use values::{ColumnValue, WritableValue};
