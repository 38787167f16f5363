//! ES module bundling via `rollup -c`
//!
//! The project's rollup config reads its input, output and map flag from
//! `INPUT_FILE`, `OUTPUT_FILE` and `SOURCE_MAP`.

use crate::domain::entities::{AssetTask, AssetType};
use crate::error::AssetsResult;

use super::{append_extension, mismatched, rewrite_json_map, AssetCompiler, CompileContext};

pub struct RollupCompiler;

impl AssetCompiler for RollupCompiler {
    fn asset_type(&self) -> AssetType {
        AssetType::Rollup
    }

    fn compile(&self, ctx: &CompileContext<'_>, destination: &str, task: &AssetTask) -> AssetsResult<()> {
        let AssetTask::Rollup { file } = task else {
            return Err(mismatched(self.asset_type(), destination, task));
        };

        let output = ctx.output_path(destination)?;
        let invocation = ctx
            .npx("rollup")
            .arg("-c")
            .env("INPUT_FILE", ctx.source_path(file).display().to_string())
            .env("OUTPUT_FILE", output.display().to_string())
            .env("SOURCE_MAP", if ctx.want_source_map { "1" } else { "0" });

        ctx.execute(self.asset_type(), destination, &invocation)?;

        if ctx.want_source_map {
            rewrite_json_map(&append_extension(&output, "map"), ctx.uris)?;
        }
        Ok(())
    }
}
