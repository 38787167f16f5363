//! Verbatim copy

use crate::domain::entities::{AssetTask, AssetType};
use crate::error::AssetsResult;
use crate::infrastructure::fs::{copy_path, join_relative};

use super::{mismatched, AssetCompiler, CompileContext};

/// Copies `<source>/<destination>` to `<output>/<destination>`
pub struct CopyCompiler;

impl AssetCompiler for CopyCompiler {
    fn asset_type(&self) -> AssetType {
        AssetType::Copy
    }

    fn compile(&self, ctx: &CompileContext<'_>, destination: &str, task: &AssetTask) -> AssetsResult<()> {
        if !matches!(task, AssetTask::Copy) {
            return Err(mismatched(self.asset_type(), destination, task));
        }
        let source = join_relative(ctx.source_root, destination, destination)?;
        let target = join_relative(ctx.destination_root, destination, destination)?;
        copy_path(&source, &target)
    }
}
