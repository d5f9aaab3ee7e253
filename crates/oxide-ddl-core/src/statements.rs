//! Splitting a SQL source into `CREATE` statements.

/// Splits `source` on `;` and keeps the trimmed fragments that start with
/// `create` (any case), in order.
///
/// Leading `--` line comments and `/* ... */` blocks are skipped before the
/// check, so dump headers do not hide the statement that follows them.
///
/// ```
/// use oxide_ddl_core::create_statements;
///
/// let sql = "CREATE TABLE `t1`();SELECT * FROM t1; CREATE TABLE `t2`;";
/// assert_eq!(create_statements(sql), ["CREATE TABLE `t1`()", "CREATE TABLE `t2`"]);
/// ```
#[must_use]
pub fn create_statements(source: &str) -> Vec<String> {
    source
        .split(';')
        .map(skip_leading_comments)
        .filter(|fragment| {
            fragment
                .get(..6)
                .is_some_and(|head| head.eq_ignore_ascii_case("create"))
        })
        .map(String::from)
        .collect()
}

/// Trims whitespace and comments from the start of a fragment, and
/// whitespace from its end.
fn skip_leading_comments(fragment: &str) -> &str {
    let mut rest = fragment.trim();
    loop {
        if let Some(after) = rest.strip_prefix("--") {
            rest = after.find('\n').map_or("", |i| &after[i + 1..]).trim_start();
            continue;
        }
        if let Some(after) = rest.strip_prefix("/*") {
            rest = after.find("*/").map_or("", |i| &after[i + 2..]).trim_start();
            continue;
        }
        return rest;
    }
}
