//! LESS via `lessc`

use crate::domain::entities::{AssetTask, AssetType};
use crate::error::AssetsResult;

use super::{append_extension, mismatched, rewrite_json_map, AssetCompiler, CompileContext};

pub struct LessCompiler;

impl AssetCompiler for LessCompiler {
    fn asset_type(&self) -> AssetType {
        AssetType::Less
    }

    fn compile(&self, ctx: &CompileContext<'_>, destination: &str, task: &AssetTask) -> AssetsResult<()> {
        let AssetTask::Less { file } = task else {
            return Err(mismatched(self.asset_type(), destination, task));
        };

        let output = ctx.output_path(destination)?;
        let map = append_extension(&output, "map");

        let mut invocation = ctx
            .npx("lessc")
            .arg("--clean-css=--keepSpecialComments=0");
        if ctx.want_source_map {
            invocation = invocation.arg(format!("--source-map={}", map.display()));
        }
        let invocation = invocation
            .arg(ctx.source_path(file).display().to_string())
            .arg(output.display().to_string());

        ctx.execute(self.asset_type(), destination, &invocation)?;

        if ctx.want_source_map {
            rewrite_json_map(&map, ctx.uris)?;
        }
        Ok(())
    }
}
