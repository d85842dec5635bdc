//! 내장 템플릿 목록.

pub const TEMPLATE_NAMES: [&str; 3] = ["minimal", "api", "web"];

/// 템플릿에 포함된 파일 하나(상대 경로 + 본문).
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: &'static str,
}

const README: TemplateFile = TemplateFile {
    path: "README.md",
    content: "# {{projectName}}\n\nAssistant mode: `{{mode}}`. Run `vibe start` to open a session.\n",
};

const SECURITY_PROMPT: TemplateFile = TemplateFile {
    path: ".vibe/prompts/project-security.md",
    content: "Security notes for {{projectName}}:\n\n- List the trust boundaries of this project here.\n- Record any data that must never be logged.\n",
};

const MINIMAL: &[TemplateFile] = &[README];

const API: &[TemplateFile] = &[
    README,
    SECURITY_PROMPT,
    TemplateFile {
        path: "docs/api.md",
        content: "# {{projectName}} API\n\n| Method | Path | Auth | Description |\n|---|---|---|---|\n",
    },
    TemplateFile {
        path: ".env.example",
        content: "# Copy to .env and fill in. Never commit real secrets.\nAPI_PORT=3000\nDATABASE_URL=\n",
    },
];

const WEB: &[TemplateFile] = &[
    README,
    SECURITY_PROMPT,
    TemplateFile {
        path: "docs/architecture.md",
        content: "# {{projectName}} architecture\n\n## Pages\n\n## Data flow\n\n## Auth\n",
    },
];

pub fn template_files(name: &str) -> Option<&'static [TemplateFile]> {
    match name {
        "minimal" => Some(MINIMAL),
        "api" => Some(API),
        "web" => Some(WEB),
        _ => None,
    }
}

const PROMPT_PREFIX: &str = ".vibe/prompts/";

/// 템플릿이 `.vibe/prompts/` 아래에 두는 프롬프트의 식별자(파일 이름에서 `.md` 제외).
pub fn template_prompt_ids(name: &str) -> Vec<String> {
    template_files(name)
        .unwrap_or_default()
        .iter()
        .filter_map(|file| {
            file.path
                .strip_prefix(PROMPT_PREFIX)?
                .strip_suffix(".md")
                .map(ToString::to_string)
        })
        .collect()
}
