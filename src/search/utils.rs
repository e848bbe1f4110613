use super::{
    defs::{
        SearchControl, SearchRefs, SearchReport, SearchSummary, SearchTerminate,
        CHECK_TERMINATION,
    },
    Search,
};
use crate::engine::defs::{ErrFatal, Information};

impl Search {
    // Check if the search must stop: the wall clock has run past its
    // budget, or the engine sent a Stop or Quit command. The clock is
    // cheap and is checked on every call; the channel only every
    // CHECK_TERMINATION nodes.
    pub fn check_termination(refs: &mut SearchRefs) {
        if Search::out_of_time(refs) {
            refs.search_info.terminate = SearchTerminate::Stop;
            return;
        }

        if refs.search_info.nodes & CHECK_TERMINATION == 0 {
            if let Some(control_rx) = refs.control_rx {
                match control_rx.try_recv() {
                    Ok(SearchControl::Stop) => refs.search_info.terminate = SearchTerminate::Stop,
                    Ok(SearchControl::Quit) => refs.search_info.terminate = SearchTerminate::Quit,
                    Ok(_) | Err(_) => (),
                }
            }
        }
    }

    pub fn nodes_per_second(nodes: u64, msecs: u128) -> u64 {
        let mut nps: u64 = 0;
        let seconds = msecs as f64 / 1000f64;
        if seconds > 0f64 {
            nps = (nodes as f64 / seconds).round() as u64;
        }
        nps
    }

    // Send a per-depth summary to the engine thread, if one is listening.
    pub fn report_summary(refs: &mut SearchRefs, summary: SearchSummary) {
        if let Some(report_tx) = refs.report_tx {
            let information = Information::Search(SearchReport::SearchSummary(summary));
            report_tx.send(information).expect(ErrFatal::CHANNEL);
        }
    }
}
