//! Binlog 컬럼 값 정규화
//!
//! `(선언 타입 코드, 원시 값)` 쌍을 레코드 출력 계층이 받아들이는
//! `WritableValue`로 변환합니다. 상태 없음, 동기, 호출 간 독립적.
//!
//! 시간 값 처리 주의: 상위 binlog 디코딩 계층은 시간 값을 이미 GMT 기준
//! 인스턴트로 읽어들입니다. 따라서 포맷팅도 같은 존을 사용해야 이중
//! 시프트가 발생하지 않습니다. `source_zone`은 "상위 디코더가 인스턴트를
//! 구체화할 때 사용한 존"과 일치해야 합니다 (기본값 GMT).

use crate::error::{NormalizeError, Result};
use crate::sql_type::SqlTypeCode;
use crate::values::{ColumnValue, WritableValue};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 타임스탬프/날짜 출력 형식 (소수 초 없음, 존 접미사 없음)
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 바이트 열 디코딩에 사용할 문자 인코딩
///
/// 플랫폼 기본 인코딩 의존 대신 명시적 설정으로 받습니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    /// UTF-8 (기본값). 잘못된 시퀀스는 U+FFFD로 대체되며 에러가 아님
    #[default]
    Utf8,
    /// ISO-8859-1 (Latin-1)
    Latin1,
}

impl TextEncoding {
    /// 인코딩 라벨 파싱 ("utf-8", "latin1", "iso-8859-1" 등)
    pub fn from_label(label: &str) -> Result<Self> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(NormalizeError::UnknownEncoding(label.to_string())),
        }
    }

    /// 바이트 열을 문자열로 디코딩 (실패 없음, best-effort)
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).to_string(),
            // Latin-1은 바이트 값이 곧 코드포인트
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// 컬럼 메타데이터 (이름 + 선언 타입 코드)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// 선언된 SQL 타입 코드 (없으면 타입 미상)
    pub type_code: Option<i32>,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, type_code: Option<i32>) -> Self {
        ColumnInfo {
            name: name.into(),
            type_code,
        }
    }
}

/// 컬럼 값 정규화기
#[derive(Debug, Clone)]
pub struct ValueNormalizer {
    encoding: TextEncoding,
    source_zone: Tz,
}

impl Default for ValueNormalizer {
    fn default() -> Self {
        ValueNormalizer {
            encoding: TextEncoding::Utf8,
            source_zone: Tz::GMT,
        }
    }
}

impl ValueNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_source_zone(mut self, source_zone: Tz) -> Self {
        self.source_zone = source_zone;
        self
    }

    /// 문자열 라벨로부터 정규화기 구성 (설정 파일/환경 변수용)
    pub fn from_labels(encoding: &str, source_zone: &str) -> Result<Self> {
        let encoding = TextEncoding::from_label(encoding)?;
        let zone: Tz = source_zone
            .parse()
            .map_err(|_| NormalizeError::UnknownZone(source_zone.to_string()))?;
        Ok(ValueNormalizer {
            encoding,
            source_zone: zone,
        })
    }

    /// 원시 컬럼 값을 기록용 값으로 정규화
    ///
    /// 분기 우선순위:
    /// 1. null 입력 → null (선언 타입 무시)
    /// 2. 선언 타입 미상: 바이트 → 디코딩, 숫자 → 통과,
    ///    타임스탬프/날짜 → 포맷, 그 외 → null
    /// 3. 선언 타입 존재: 숫자 → 통과 (타입 코드보다 우선),
    ///    TIMESTAMP 선언 + 시간 값 → 포맷, 바이트 → 디코딩,
    ///    그 외 → 일반 문자열 변환
    pub fn normalize(
        &self,
        declared_type: Option<i32>,
        raw: Option<&ColumnValue>,
    ) -> WritableValue {
        let value = match raw {
            None | Some(ColumnValue::Null) => return WritableValue::Null,
            Some(v) => v,
        };

        match declared_type {
            None => {
                if let ColumnValue::Bytes(bytes) = value {
                    WritableValue::Text(self.encoding.decode(bytes))
                } else if let Some(num) = value.as_writable_number() {
                    num
                } else if let ColumnValue::Timestamp(dt) = value {
                    WritableValue::Text(self.format_instant(*dt))
                } else if let ColumnValue::Date(date) = value {
                    WritableValue::Text(self.format_date(*date))
                } else {
                    // 타입 미상 + 미인식 값은 조용히 null로 수렴
                    WritableValue::Null
                }
            }
            Some(code) => {
                if let Some(num) = value.as_writable_number() {
                    return num;
                }
                if SqlTypeCode::from_i32(code) == SqlTypeCode::Timestamp {
                    match value {
                        ColumnValue::Timestamp(dt) => {
                            return WritableValue::Text(self.format_instant(*dt));
                        }
                        ColumnValue::Date(date) => {
                            return WritableValue::Text(self.format_date(*date));
                        }
                        // 시간 값이 아니면 아래 일반 분기로 진행
                        _ => {}
                    }
                }
                if let ColumnValue::Bytes(bytes) = value {
                    WritableValue::Text(self.encoding.decode(bytes))
                } else {
                    WritableValue::Text(value.to_string())
                }
            }
        }
    }

    /// 행 전체를 정규화하여 JSON 객체로 변환
    ///
    /// 컬럼 수보다 행이 짧으면 나머지는 null로 채웁니다.
    pub fn normalize_row(&self, columns: &[ColumnInfo], row: &[ColumnValue]) -> serde_json::Value {
        let mut object = serde_json::Map::new();

        for (i, column) in columns.iter().enumerate() {
            let raw = row.get(i);
            let normalized = self.normalize(column.type_code, raw);
            object.insert(column.name.clone(), normalized.to_json());
        }

        trace!("Normalized row with {} columns", columns.len());
        serde_json::Value::Object(object)
    }

    /// 인스턴트를 source zone으로 변환 후 포맷
    fn format_instant(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.source_zone)
            .format(DATE_TIME_FORMAT)
            .to_string()
    }

    /// 캘린더 날짜를 source zone의 자정 인스턴트로 취급하여 포맷
    ///
    /// 어느 존에서든 `YYYY-MM-DD 00:00:00`으로 렌더링되어야 합니다.
    fn format_date(&self, date: NaiveDate) -> String {
        let midnight = date.and_time(NaiveTime::MIN);
        match self.source_zone.from_local_datetime(&midnight).earliest() {
            Some(instant) => instant.format(DATE_TIME_FORMAT).to_string(),
            // 존 전환으로 자정이 존재하지 않는 날은 벽시계 그대로 렌더링
            None => midnight.format(DATE_TIME_FORMAT).to_string(),
        }
    }
}
