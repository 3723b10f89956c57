use std::path::Path;

use csv_async::AsyncSerializer;
use tokio::fs;
use tokio_util::compat::TokioAsyncWriteCompatExt;

use crate::error::{Error, Result};
use crate::fetching::KpiRecord;

pub async fn save_json(records: &[KpiRecord], path: &Path) -> Result<()> {
    let payload = serde_json::to_string_pretty(records)
        .map_err(|err| Error::Persist(format!("Failed to encode records as JSON: {err}")))?;

    fs::write(path, payload)
        .await
        .map_err(|err| Error::Persist(format!("Failed to write {}: {err}", path.display())))?;

    Ok(())
}

pub async fn save_csv(records: &[KpiRecord], path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .await
        .map_err(|err| Error::Persist(format!("Failed to create {}: {err}", path.display())))?;

    let mut writer = AsyncSerializer::from_writer(file.compat_write());

    for record in records {
        writer
            .serialize(record)
            .await
            .map_err(|err| Error::Persist(format!("Failed to serialize record to CSV: {err}")))?;
    }

    writer
        .flush()
        .await
        .map_err(|err| Error::Persist(format!("Failed to write {}: {err}", path.display())))?;

    Ok(())
}

pub async fn save_text(contents: &str, path: &Path) -> Result<()> {
    fs::write(path, contents)
        .await
        .map_err(|err| Error::Persist(format!("Failed to write {}: {err}", path.display())))?;

    Ok(())
}
