use anyhow::Result;
use serde_json::json;

use crate::audit::AuditLog;

pub async fn run(db_path: Option<String>) -> Result<()> {
    let audit = AuditLog::connect(db_path.as_deref()).await;
    let logs = audit.recent().await;
    println!("{}", json!({ "logs": logs }));
    Ok(())
}
