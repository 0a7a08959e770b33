use std::path::Path;

use anyhow::Context as _;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::schema_registry::{SchemaDocument, SchemaRegistry};

pub struct DocumentLoader {
  file: AsyncMmapFile,
}

impl DocumentLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("opening schema document {}", path.display()))?;

    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<SchemaDocument> {
    SchemaDocument::from_json_slice(self.file.as_slice())
  }

  pub fn load_registry(&self) -> anyhow::Result<SchemaRegistry> {
    Ok(SchemaRegistry::from_document(self.parse()?))
  }
}
