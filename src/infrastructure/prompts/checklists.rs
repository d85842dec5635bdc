//! 보안 체크리스트 본문.

use crate::domain::mode::ChecklistType;

const PRE_IMPLEMENTATION: &str = r#"### Before implementing

- [ ] Identify untrusted inputs (user input, files, network, environment).
- [ ] Decide where validation happens and what is rejected.
- [ ] Confirm who is allowed to perform the action (authentication and authorization).
- [ ] Check whether secrets, tokens or personal data are involved and how they are stored.
- [ ] Prefer existing, vetted libraries over custom security code."#;

const POST_IMPLEMENTATION: &str = r#"### After implementing

- [ ] Every untrusted input is validated or encoded before use.
- [ ] Errors do not leak stack traces, queries or secrets.
- [ ] No credentials, keys or tokens are committed or logged.
- [ ] New dependencies are pinned and come from trusted sources.
- [ ] Tests cover at least one malicious or malformed input."#;

const OWASP_TOP_10: &str = r#"### OWASP Top 10 review

- [ ] A01 Broken Access Control: every endpoint and action checks permissions server-side.
- [ ] A02 Cryptographic Failures: data in transit uses TLS; data at rest uses vetted algorithms.
- [ ] A03 Injection: queries are parameterized; shell and template input is escaped.
- [ ] A04 Insecure Design: abuse cases were considered, not only happy paths.
- [ ] A05 Security Misconfiguration: debug modes, default credentials and verbose errors are off.
- [ ] A06 Vulnerable Components: dependencies are current and free of known CVEs.
- [ ] A07 Identification and Authentication Failures: sessions expire; passwords are hashed with a slow KDF.
- [ ] A08 Software and Data Integrity Failures: updates and serialized data are verified.
- [ ] A09 Logging and Monitoring Failures: security events are logged without sensitive data.
- [ ] A10 Server-Side Request Forgery: outbound URLs are allow-listed."#;

const API_SECURITY: &str = r#"### API security

- [ ] Every route requires authentication unless explicitly public.
- [ ] Object-level authorization is checked for each resource id.
- [ ] Request bodies are schema-validated; unknown fields are rejected or ignored deliberately.
- [ ] Rate limiting and payload size limits are in place.
- [ ] Responses expose only the fields the client needs."#;

/// 체크리스트 종류에 해당하는 섹션 목록. `None`이면 비어 있다.
pub fn checklist_sections(kind: ChecklistType) -> Vec<&'static str> {
    match kind {
        ChecklistType::Pre => vec![PRE_IMPLEMENTATION],
        ChecklistType::Post => vec![POST_IMPLEMENTATION],
        ChecklistType::Owasp => vec![OWASP_TOP_10],
        ChecklistType::Api => vec![API_SECURITY],
        ChecklistType::Full => vec![
            PRE_IMPLEMENTATION,
            POST_IMPLEMENTATION,
            OWASP_TOP_10,
            API_SECURITY,
        ],
        ChecklistType::None => Vec::new(),
    }
}
