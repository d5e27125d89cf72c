//! 정규화 설정 관련 에러 타입
//!
//! 정규화 자체는 에러를 발생시키지 않습니다 (불규칙 입력은 null 또는
//! best-effort 문자열로 수렴). 에러는 설정 파싱 시점에만 존재합니다.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("알 수 없는 문자 인코딩: {0}")]
    UnknownEncoding(String),

    #[error("알 수 없는 타임존: {0}")]
    UnknownZone(String),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
