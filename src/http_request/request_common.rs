/// Fixed value of the `module` argument for every Reporting API call.
pub(crate) const API_MODULE: &str = "API";

/// A call against the Reporting API endpoint.
///
/// Each implementor stands for one remote operation and knows two things:
/// the remote method identifier selecting the handler, and the
/// operation-specific query arguments. The session-wide arguments
/// (`module`, `method`, `format`, `token_auth`) are merged in by the
/// client when the URL is built.
pub trait ReportingRequestType {
    /// Remote method identifier, e.g. `"UsersManager.addUser"`.
    fn method(&self) -> &'static str;

    /// Operation-specific query arguments, in declaration order.
    fn query_args(&self) -> Vec<(&'static str, String)> { Vec::new() }
}

/// Merges the fixed session arguments into the operation arguments.
///
/// A fixed key colliding with an operation key keeps the operation key's
/// position but receives the fixed value; the remaining fixed keys are
/// appended in the order given. The remote service matches on these keys
/// exactly, so a caller-supplied value must never survive the merge.
pub(crate) fn merge_fixed_args(
    args: &mut Vec<(&'static str, String)>,
    fixed: [(&'static str, String); 4],
) {
    for (name, value) in fixed {
        match args.iter_mut().find(|(arg_name, _)| *arg_name == name) {
            Some(arg) => arg.1 = value,
            None => args.push((name, value)),
        }
    }
}

/// Percent-encodes the values (not the keys) and joins the pairs with `&`.
pub(crate) fn encode_query(args: &[(&'static str, String)]) -> String {
    args.iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends a query string to a base URL after a literal `?`.
pub(crate) fn append_query(base_url: &str, query: &str) -> String {
    format!("{base_url}?{query}")
}

/// Pushes an optional argument, skipping absent and empty values.
///
/// The Reporting API treats an empty value as "not provided", so such
/// arguments are left out of the query entirely rather than sent empty.
pub(crate) fn push_if_present(
    args: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        if !value.is_empty() {
            args.push((name, String::from(value)));
        }
    }
}
