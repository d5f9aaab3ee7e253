#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use oxide_ddl::{run, Cli, Outcome};

pub const USERS_SQL: &str = "\
-- users
CREATE TABLE `t_user` (
  `id` bigint(20) NOT NULL COMMENT 'pk',
  `nick_name` varchar(32) NOT NULL DEFAULT ''
) ENGINE=InnoDB;
";

pub const USERS_GO: &str = concat!(
    "package main\n",
    "\n",
    "type User struct {\n",
    "\tID       int64  `json:\"id\" db:\"id\" comment:\"pk\"`\n",
    "\tNickName string `json:\"nick_name\" db:\"nick_name\"`\n",
    "}\n",
);

pub fn write_sql(dir: &Path, name: &str, sql: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, sql).unwrap();
    path
}

pub fn cli(path: &Path, args: &[&str]) -> Cli {
    let path = path.to_str().unwrap();
    Cli::try_parse_from(
        ["oxide-ddl", path]
            .into_iter()
            .chain(args.iter().copied()),
    )
    .unwrap_or_else(|e| panic!("Failed to parse {args:?}: {e}"))
}

/// Runs the tool and returns the outcome plus whatever was printed.
pub fn run_cli(cli: &Cli) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = run(cli, &mut out).unwrap_or_else(|e| panic!("Run failed: {e}"));
    (outcome, String::from_utf8(out).unwrap())
}
