mod clean_test;
mod cli_test;
mod watch_test;
