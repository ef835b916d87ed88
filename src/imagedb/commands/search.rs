use crate::commands::{CmdResult, Gallery};
use crate::search::filter;

pub fn run(gallery: &Gallery, query: &str) -> CmdResult {
    let all = gallery.collection.all();
    let listed = filter(all, query).into_iter().cloned().collect();
    CmdResult::default().with_listed_images(listed, all.len())
}
