//! JavaScript minification via `uglifyjs`

use std::path::PathBuf;

use crate::domain::entities::{AssetTask, AssetType};
use crate::error::AssetsResult;

use super::{append_extension, mismatched, rewrite_text_map, AssetCompiler, CompileContext};

pub struct UglifyJsCompiler;

impl AssetCompiler for UglifyJsCompiler {
    fn asset_type(&self) -> AssetType {
        AssetType::UglifyJs
    }

    fn compile(&self, ctx: &CompileContext<'_>, destination: &str, task: &AssetTask) -> AssetsResult<()> {
        let AssetTask::UglifyJs { files } = task else {
            return Err(mismatched(self.asset_type(), destination, task));
        };

        let output = ctx.output_path(destination)?;
        let sources: Vec<PathBuf> = files.iter().map(|f| ctx.source_path(f)).collect();

        let mut invocation = ctx
            .npx("uglifyjs")
            .args(sources.iter().map(|s| s.display().to_string()))
            .arg("-o")
            .arg(output.display().to_string())
            .arg("--compress");
        if ctx.want_source_map {
            let map_name = output
                .file_name()
                .map(|n| format!("{}.map", n.to_string_lossy()))
                .unwrap_or_default();
            invocation = invocation
                .arg("--source-map")
                .arg(format!("url={}", map_name));
        }

        ctx.execute(self.asset_type(), destination, &invocation)?;

        if ctx.want_source_map {
            rewrite_text_map(&append_extension(&output, "map"), &sources, ctx.uris)?;
        }
        Ok(())
    }
}
