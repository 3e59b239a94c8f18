//! Function purpose inference from a name and its body text.
//!
//! The name's leading verb selects a base description; the body adds an
//! implied return bucket and at most one behavior category, e.g.
//! `fetchUsers` -> "Retrieves data users and returns array, communicates
//! with external API or services".

/// Verb prefixes and their meanings, checked in order (case-insensitive).
pub static PREFIXES: &[(&str, &str)] = &[
    ("get", "Retrieves or calculates"),
    ("set", "Updates or changes"),
    ("is", "Checks if"),
    ("has", "Checks if it contains"),
    ("calc", "Calculates"),
    ("compute", "Computes or calculates"),
    ("create", "Creates a new"),
    ("build", "Constructs"),
    ("make", "Creates"),
    ("generate", "Produces or creates"),
    ("find", "Searches for"),
    ("search", "Searches for"),
    ("parse", "Analyzes and processes"),
    ("format", "Formats or structures"),
    ("convert", "Converts or transforms"),
    ("transform", "Transforms"),
    ("validate", "Validates or checks"),
    ("check", "Checks or verifies"),
    ("handle", "Processes or manages"),
    ("process", "Processes"),
    ("update", "Updates"),
    ("delete", "Removes"),
    ("remove", "Removes"),
    ("add", "Adds"),
    ("insert", "Inserts"),
    ("fetch", "Retrieves data"),
    ("load", "Loads data"),
    ("save", "Saves or persists"),
    ("store", "Stores or saves"),
    ("render", "Displays or renders"),
    ("display", "Shows or displays"),
    ("print", "Outputs or prints"),
    ("log", "Records or logs"),
    ("init", "Initializes"),
    ("initialize", "Sets up initial state"),
    ("setup", "Configures or sets up"),
    ("configure", "Configures"),
    ("start", "Begins or initiates"),
    ("stop", "Stops or terminates"),
    ("pause", "Temporarily halts"),
    ("resume", "Continues after pausing"),
    ("on", "Handles event"),
];

/// Implied return buckets; the first bucket with a matching substring wins.
pub static RETURN_PATTERNS: &[(&str, &[&str])] = &[
    (
        "boolean",
        &["return true", "return false", "return (", "return !", "return !!"],
    ),
    (
        "string",
        &["return \"", "return '", "return `", "+", "concat", "join", "toString"],
    ),
    (
        "number",
        &["return 0", "return 1", "return -", "return parseFloat", "return parseInt", "Math."],
    ),
    (
        "array",
        &["return [", "push(", "pop(", "shift(", "filter(", "map(", "forEach(", "reduce("],
    ),
    (
        "object",
        &["return {", "return new", ".keys(", ".values(", ".entries("],
    ),
    ("void", &["return;", "setState", "this.state", "console.log"]),
];

/// Behavior categories in priority order.
pub static CATEGORIES: &[(&str, &[&str])] = &[
    (
        "manages UI components or rendering",
        &[
            "render", "component", "props", "state", "useState", "useEffect", "return <",
            "className", "style=",
        ],
    ),
    (
        "communicates with external API or services",
        &[
            "fetch(", "axios", "http", ".get(", ".post(", ".put(", ".delete(", "request",
            "response",
        ],
    ),
    (
        "processes or transforms data",
        &[
            "map", "filter", "reduce", "forEach", ".find(", ".sort(", "array", "object", "json",
        ],
    ),
    (
        "handles user interactions or events",
        &[
            "click", "change", "submit", "event", "handler", "listener", "on",
            "addEventListener",
        ],
    ),
];

/// Split an identifier into words on case boundaries.
///
/// A word is an optional capital followed by lowercase letters, or a run
/// of capitals that ends the identifier or precedes another capital.
/// Everything else (digits, underscores, a lone trailing capital before a
/// separator) is dropped: `parseHTTPResponse` -> `parse HTTP Response`,
/// `get_user_name` -> `get user name`.
pub fn split_words(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let mut words = Vec::new();
    let mut i = 0;

    let lower_run = |from: usize| {
        let mut j = from;
        while j < bytes.len() && bytes[j].is_ascii_lowercase() {
            j += 1;
        }
        j
    };

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_lowercase() {
            let end = lower_run(i);
            words.push(&name[i..end]);
            i = end;
        } else if c.is_ascii_uppercase() {
            if i + 1 < bytes.len() && bytes[i + 1].is_ascii_lowercase() {
                let end = lower_run(i + 1);
                words.push(&name[i..end]);
                i = end;
                continue;
            }
            let mut end = i;
            while end < bytes.len() && bytes[end].is_ascii_uppercase() {
                end += 1;
            }
            if end == bytes.len() {
                words.push(&name[i..end]);
                i = end;
            } else if end - i >= 2 {
                // The last capital may start the next word.
                words.push(&name[i..end - 1]);
                i = end - 1;
            } else {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    words
}

fn lower_words(name: &str) -> String {
    split_words(name).join(" ").to_lowercase()
}

/// Base description from the name's verb prefix.
fn describe_name(name: &str) -> String {
    for (prefix, meaning) in PREFIXES {
        let matches = name.len() >= prefix.len()
            && name.is_char_boundary(prefix.len())
            && name[..prefix.len()].eq_ignore_ascii_case(prefix);
        if !matches {
            continue;
        }
        let rest = lower_words(name[prefix.len()..].trim());
        return if rest.is_empty() {
            format!("{} data", meaning)
        } else {
            format!("{} {}", meaning, rest)
        };
    }
    format!("Handles {} functionality", lower_words(name))
}

fn first_match(body: &str, table: &'static [(&'static str, &'static [&'static str])]) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| body.contains(p)))
        .map(|(label, _)| *label)
}

/// Implied return bucket of a function body, if any.
pub fn return_kind(body: &str) -> Option<&'static str> {
    first_match(body, RETURN_PATTERNS)
}

/// Behavior category of a function body, if any.
pub fn category(body: &str) -> Option<&'static str> {
    first_match(body, CATEGORIES)
}

/// Full purpose sentence for a function.
pub fn infer_purpose(name: &str, body: &str) -> String {
    let mut purpose = describe_name(name);

    let mut extras = Vec::new();
    if let Some(kind) = return_kind(body) {
        extras.push(format!("returns {}", kind));
    }
    if let Some(cat) = category(body) {
        extras.push(cat.to_string());
    }
    if !extras.is_empty() {
        purpose.push_str(" and ");
        purpose.push_str(&extras.join(", "));
    }
    purpose
}
