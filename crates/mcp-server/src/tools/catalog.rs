#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "help",
        summary: "Explain the report legend (A/R/N/S) and list tools.",
    },
    ToolDescriptor {
        name: "resolve_tag",
        summary: "Rank registry occurrences of a tag by ancestry match against an XML fragment.",
    },
    ToolDescriptor {
        name: "search_specializations",
        summary: "Find tag specializations whose description contains a term.",
    },
    ToolDescriptor {
        name: "link_script",
        summary: "SQL script linking a specialization to one tag occurrence.",
    },
    ToolDescriptor {
        name: "new_specialization_script",
        summary: "SQL script registering a new specialization (next free id by default).",
    },
    ToolDescriptor {
        name: "situation_script",
        summary: "SQL script registering a message issuer/receiver situation.",
    },
];

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Esptag resolves XML tags in sample messages to tag-registry occurrences and generates registry scripts."
            .to_string(),
        "Recommended flow: resolve_tag → search_specializations (or new_specialization_script) → link_script."
            .to_string(),
        "Use help for the report legend (A/R/N/S).".to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
