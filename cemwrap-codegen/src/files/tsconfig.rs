//! tsconfig.json scaffold for the generated wrapper package.

use std::path::{Path, PathBuf};

use cemwrap_core::{FileRules, GeneratedFile};

/// The tsconfig.json compiler-configuration file.
pub struct TsConfig;

impl GeneratedFile for TsConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tsconfig.json")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ES2022",
    "moduleResolution": "bundler",
    "strict": true,
    "experimentalDecorators": true,
    "emitDecoratorMetadata": true,
    "skipLibCheck": true
  },
  "include": ["*.ts"]
}
"#
        .to_string()
    }
}
