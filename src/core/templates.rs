//! Fixed templates for new projects
//!
//! These are static literals written into every scaffolded project. The
//! template files are canonical: a `create --force` run overwrites whatever
//! is already on disk.

/// Contents of the generated `.gitignore`
pub const GITIGNORE: &str = "node_modules/\ndist/\n";

/// Contents of the generated `tsconfig.json`
pub const TSCONFIG: &str = r#"{
  // Visit https://aka.ms/tsconfig to read more about this file
  "compilerOptions": {
    // File Layout
    "rootDir": "./src",
    "outDir": "./dist",

    // Environment Settings
    // See also https://aka.ms/tsconfig/module
    "module": "nodenext",
    "target": "esnext",

    // For nodejs:
    "lib": ["esnext"],
    "types": ["node"],
    // and npm install -D @types/node

    // Other Outputs
    "sourceMap": true,
    "declaration": true,
    "declarationMap": true,

    // Stricter Typechecking Options
    "noUncheckedIndexedAccess": true,
    "exactOptionalPropertyTypes": true,

    // Recommended Options
    "strict": true,
    "jsx": "react-jsx",
    "verbatimModuleSyntax": true,
    "isolatedModules": true,
    "noUncheckedSideEffectImports": true,
    "moduleDetection": "force",
    "skipLibCheck": true
  }
}
"#;

/// Contents of the generated placeholder `src/index.ts`
pub const INDEX_TS: &str = "console.log(\"demo\");\n";

/// Default scripts written into every new project, in insertion order
pub const DEFAULT_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "ts-node src/index.ts"),
    ("build", "tsc"),
    ("typecheck", "tsc --noEmit"),
    ("start", "node dist/index.js"),
];

/// Dev dependencies installed into every new project
pub const DEFAULT_DEV_DEPS: &[&str] = &["typescript", "ts-node", "@types/node"];
