//! Test fixtures - reusable content constants for tests.

/// Copy plus LESS, the smallest useful manifest
pub const BASIC_CONFIG: &str = r#"[manifest]
"vendor.css" = "copy"
"app.css" = { type = "less", file = "app.less" }
"#;

/// One entry of every type, with an env-filtered script
pub const FULL_CONFIG: &str = r#"[paths]
source = "assets"
destination = "www/assets"

[manifest]
"vendor.css" = "copy"
"app.css" = { type = "less", file = "app.less" }
"css" = { type = "sass", files = ["theme.scss"] }
"app.js" = { type = "uglifyjs", files = ["lib.js", "main.js"] }
"bundle.js" = { type = "rollup", file = "entry.js" }
"debug.js" = { type = "uglifyjs", files = ["debug.js"], env = "debug" }
"#;

pub const VENDOR_CSS: &str = "body { margin: 0; }\n";
pub const APP_LESS: &str = "@color: #333;\nbody { color: @color; }\n";
pub const THEME_SCSS: &str = "$bg: white;\nbody { background: $bg; }\n";
pub const LIB_JS: &str = "function lib() { return 1; }\n";
pub const MAIN_JS: &str = "lib();\n";
pub const ENTRY_JS: &str = "import './lib.js';\n";
pub const DEBUG_JS: &str = "console.log('debug');\n";

/// LESS the fake compiler refuses
pub const BROKEN_LESS: &str = "@error unbalanced {\n";

/// Stand-in for `npx` that understands the four compiler command lines
///
/// Appends each tool name to `$FAKE_NPX_LOG` when set. Sources containing
/// `@error` make the tool fail.
pub const FAKE_NPX: &str = r#"#!/bin/sh
tool="$1"
shift
if [ -n "$FAKE_NPX_LOG" ]; then
  echo "$tool" >> "$FAKE_NPX_LOG"
fi

case "$tool" in
  lessc)
    map=""
    src=""
    out=""
    for arg in "$@"; do
      case "$arg" in
        --source-map=*) map="${arg#--source-map=}" ;;
      esac
      src="$out"
      out="$arg"
    done
    if grep -q "@error" "$src"; then
      echo "ParseError: unrecognised input in $src" >&2
      exit 1
    fi
    { echo "/* lessc */"; cat "$src"; } > "$out" || exit 1
    if [ -n "$map" ]; then
      printf '{"version":3,"file":"out.css","sources":["%s"],"mappings":"AAAA"}' "$src" > "$map"
    fi
    ;;
  node-sass)
    src="$1"
    shift
    dir=""
    map=0
    for arg in "$@"; do
      case "$arg" in
        --output=*) dir="${arg#--output=}" ;;
        --source-map=true) map=1 ;;
      esac
    done
    name=$(basename "$src")
    stem="${name%.*}"
    { echo "/* sass */"; cat "$src"; } > "$dir/$stem.css" || exit 1
    if [ "$map" = 1 ]; then
      printf '{"version":3,"sources":["%s"],"mappings":""}' "$src" > "$dir/$stem.css.map"
    fi
    ;;
  uglifyjs)
    out=""
    map=0
    prev=""
    for arg in "$@"; do
      if [ "$prev" = "-o" ]; then
        out="$arg"
      fi
      if [ "$arg" = "--source-map" ]; then
        map=1
      fi
      prev="$arg"
    done
    : > "$out" || exit 1
    sources=""
    for arg in "$@"; do
      if [ "$arg" = "-o" ]; then
        break
      fi
      cat "$arg" >> "$out" || exit 1
      sources="$sources${sources:+,}\"$arg\""
    done
    if [ "$map" = 1 ]; then
      printf '{"version":3,"sources":[%s],"mappings":""}' "$sources" > "$out.map"
    fi
    ;;
  rollup)
    { echo "/* rollup */"; cat "$INPUT_FILE"; } > "$OUTPUT_FILE" || exit 1
    if [ "$SOURCE_MAP" = 1 ]; then
      printf '{"version":3,"sources":["%s"],"mappings":""}' "$INPUT_FILE" > "$OUTPUT_FILE.map"
    fi
    ;;
  *)
    echo "fake npx: unknown tool $tool" >&2
    exit 127
    ;;
esac
"#;
