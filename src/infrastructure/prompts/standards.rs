//! 코딩 표준 본문.

use crate::domain::mode::StandardType;

const TYPESCRIPT: &str = r#"## Standard: TypeScript

- Enable `strict` mode; do not use `any` unless the boundary is documented.
- Validate external data at the boundary with a schema library and derive types from the schema.
- Prefer `unknown` over `any` for caught errors and narrow explicitly.
- Use `const` by default; avoid mutation of function parameters.
- Keep modules small and side-effect free at import time."#;

const API: &str = r#"## Standard: API design

- Use nouns for resources and HTTP verbs for actions.
- Return consistent error bodies: `{ "error": { "code", "message" } }`.
- Version the API explicitly (path or header) and never break a published version.
- Paginate list endpoints; never return unbounded collections.
- Document every endpoint with request/response examples."#;

pub fn standard_section(kind: StandardType) -> &'static str {
    match kind {
        StandardType::Typescript => TYPESCRIPT,
        StandardType::Api => API,
    }
}
