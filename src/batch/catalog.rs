//! # 透镜目录读取
//!
//! 从 CSV 文件读取透镜列表，每行一个 LensSpec。
//!
//! ## 格式
//! ```text
//! name,r1,r2,thickness,n_d,abbe
//! biconvex,50,-50,5,1.5168,64.17
//! # 以 # 开头的行为注释
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `csv` + `serde` 反序列化为 `models::LensSpec`

use crate::error::{Result, SingletError};
use crate::models::LensSpec;

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// 目录中的一行；name 列缺失或为空时为 None
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    name: Option<String>,
    r1: f64,
    r2: f64,
    #[serde(alias = "t")]
    thickness: f64,
    n_d: f64,
    #[serde(alias = "v")]
    abbe: f64,
}

/// 解析后的透镜目录
#[derive(Debug, Default)]
pub struct Catalog {
    /// 成功解析的透镜（保持文件顺序）
    pub lenses: Vec<LensSpec>,
    /// 无法解析的行 (行标识, 错误信息)
    pub rejected: Vec<(String, String)>,
}

impl Catalog {
    /// 目录总行数
    pub fn total(&self) -> usize {
        self.lenses.len() + self.rejected.len()
    }
}

/// 从文件读取透镜目录
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path).map_err(|e| SingletError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(file)
}

/// 从任意输入流解析透镜目录，单行错误记入 rejected 而不中断
pub fn parse_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_column = headers.iter().position(|h| h == "name");

    let mut catalog = Catalog::default();
    for (i, record) in rdr.records().enumerate() {
        let label = format!("row {}", i + 1);
        let record = match record {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                catalog.rejected.push((label, e.to_string()));
                continue;
            }
        };

        match record.deserialize::<CatalogRow>(Some(&headers)) {
            Ok(row) => {
                // 未命名的透镜按行号命名，保证输出文件名唯一
                let name = row
                    .name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| format!("lens_{:03}", i + 1));
                catalog.lenses.push(
                    LensSpec::new(row.r1, row.r2, row.thickness, row.n_d, row.abbe)
                        .with_name(name),
                );
            }
            Err(e) => {
                let label = name_column
                    .and_then(|idx| record.get(idx))
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .unwrap_or(label);
                catalog.rejected.push((label, e.to_string()));
            }
        }
    }

    if catalog.total() == 0 {
        return Err(SingletError::Other(
            "Lens catalogue contains no entries".to_string(),
        ));
    }

    Ok(catalog)
}
