//! SASS via `node-sass`
//!
//! The destination names a directory. Every source file is compiled on its
//! own into that directory, so `files = ["app.scss", "vendor.scss"]` yields
//! `app.css` and `vendor.css` side by side.

use std::fs;
use std::path::Path;

use crate::domain::entities::{AssetTask, AssetType};
use crate::error::{AssetsError, AssetsResult};
use crate::infrastructure::fs::join_relative;

use super::{mismatched, rewrite_json_map, AssetCompiler, CompileContext};

pub struct SassCompiler;

impl AssetCompiler for SassCompiler {
    fn asset_type(&self) -> AssetType {
        AssetType::Sass
    }

    fn compile(&self, ctx: &CompileContext<'_>, destination: &str, task: &AssetTask) -> AssetsResult<()> {
        let AssetTask::Sass { files } = task else {
            return Err(mismatched(self.asset_type(), destination, task));
        };

        let output_dir = join_relative(ctx.destination_root, destination, destination)?;
        fs::create_dir_all(&output_dir).map_err(|e| AssetsError::io(&output_dir, e))?;

        for file in files {
            let mut invocation = ctx
                .npx("node-sass")
                .arg(ctx.source_path(file).display().to_string())
                .args(["--quiet", "--output-style=compressed"])
                .arg(format!("--output={}", output_dir.display()));
            if ctx.want_source_map {
                invocation = invocation.args(["--source-map=true", "--source-map-contents=true"]);
            }

            ctx.execute(self.asset_type(), destination, &invocation)?;

            if ctx.want_source_map {
                rewrite_json_map(&output_dir.join(map_name(file)), ctx.uris)?;
            }
        }
        Ok(())
    }
}

/// `styles/app.scss` -> `app.css.map`
fn map_name(file: &str) -> String {
    let stem = Path::new(file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.css.map", stem)
}
