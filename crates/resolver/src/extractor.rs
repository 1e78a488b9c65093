use crate::error::{ResolveError, Result};
use crate::types::ObservedPath;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extract the parent and full ancestor path of the first `target` element in `fragment`.
///
/// Element names are compared by local part only (`ns:Foo` == `Foo`). The whole fragment is
/// tokenized even after the target is found, so trailing syntax errors still surface as
/// [`ResolveError::MalformedInput`]. Unbalanced close tags are tolerated.
pub fn extract_path(fragment: &str, target: &str) -> Result<ObservedPath> {
    let target = local_name(target);

    let mut reader = Reader::from_str(fragment);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut stack: Vec<String> = Vec::new();
    let mut found: Option<ObservedPath> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                stack.push(decode_name(element.local_name().as_ref()));
                capture_first(&stack, target, &mut found);
            }
            Ok(Event::Empty(element)) => {
                stack.push(decode_name(element.local_name().as_ref()));
                capture_first(&stack, target, &mut found);
                stack.pop();
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(ResolveError::MalformedInput {
                    position: reader.error_position(),
                    detail: err.to_string(),
                });
            }
        }
    }

    let observed = found.ok_or_else(|| ResolveError::NotFound(target.to_string()))?;
    log::debug!(
        "extracted path for '{target}': parent='{}' path={:?}",
        observed.parent,
        observed.path
    );
    Ok(observed)
}

fn capture_first(stack: &[String], target: &str, found: &mut Option<ObservedPath>) {
    if found.is_some() || stack.last().map(String::as_str) != Some(target) {
        return;
    }
    let parent = match stack.len() {
        0 | 1 => String::new(),
        len => stack[len - 2].clone(),
    };
    *found = Some(ObservedPath {
        parent,
        path: stack.to_vec(),
    });
}

fn decode_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Local part of a possibly prefixed element name.
pub(crate) fn local_name(name: &str) -> &str {
    let name = name.trim();
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}
