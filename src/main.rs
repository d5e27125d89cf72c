/// 컬럼 값 정규화기 사용 예제
///
/// 이 프로그램은 대표적인 원시 컬럼 값들을 정규화하여 JSON으로 출력합니다.
use chrono::{TimeZone, Utc};
use mysql_cdc_values::{ColumnInfo, ColumnValue, SqlTypeCode, ValueNormalizer};
use std::env;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 로깅 초기화
    tracing_subscriber::fmt::init();

    // 인코딩/존은 환경 변수로 재정의 가능
    let encoding = env::var("NORMALIZE_ENCODING").unwrap_or_else(|_| "utf-8".to_string());
    let zone = env::var("NORMALIZE_ZONE").unwrap_or_else(|_| "GMT".to_string());

    info!("Building normalizer (encoding={}, zone={})", encoding, zone);
    let normalizer = ValueNormalizer::from_labels(&encoding, &zone)?;

    let columns = vec![
        ColumnInfo::new("id", Some(SqlTypeCode::Integer as i32)),
        ColumnInfo::new("name", Some(SqlTypeCode::VarChar as i32)),
        ColumnInfo::new("balance", Some(SqlTypeCode::Decimal as i32)),
        ColumnInfo::new("created_at", Some(SqlTypeCode::Timestamp as i32)),
        ColumnInfo::new("birthday", Some(SqlTypeCode::Date as i32)),
        ColumnInfo::new("note", None),
    ];
    let row = vec![
        ColumnValue::Int32(1),
        ColumnValue::Bytes(b"alice".to_vec()),
        ColumnValue::Decimal("1234.5600".to_string()),
        ColumnValue::Timestamp(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()),
        ColumnValue::Date("1990-07-01".parse()?),
        ColumnValue::Null,
    ];

    let record = normalizer.normalize_row(&columns, &row);
    info!("Normalized {} columns", columns.len());

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
