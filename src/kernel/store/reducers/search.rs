use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::Action;

impl Store {
    pub(in crate::kernel::store) fn reduce_search_action(&mut self, action: Action) -> DispatchResult {
        let explorer = &mut self.state.explorer;
        match action {
            Action::SearchSetQuery(query) => {
                DispatchResult::changed(explorer.set_search_query(query))
            }
            Action::SearchAppend(ch) => DispatchResult::changed(explorer.append_query_char(ch)),
            Action::SearchBackspace => DispatchResult::changed(explorer.backspace_query()),
            _ => DispatchResult::unchanged(),
        }
    }
}
