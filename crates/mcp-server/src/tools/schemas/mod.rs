pub(crate) mod help;
pub(crate) mod link_script;
pub(crate) mod new_specialization_script;
pub(crate) mod resolve_tag;
pub(crate) mod search_specializations;
pub(crate) mod situation_script;
