//! Browser entry point: mounts the co-authorship network viewer.

// The binary only links the library; its dependencies are used there.
#![allow(unused_crate_dependencies)]

use coauthor_network::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App);
}
