use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shown while the snapshot fans out one fetch per symbol.
pub fn fetch_pb(length: u64) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [ {bar:40} ] {pos}/{len} symbols {spinner}")
            .unwrap()
            .progress_chars("#|-"),
    );
    pb
}
