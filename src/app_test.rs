use super::*;

#[test]
fn load_config_without_overrides_is_default() {
    if option_env!("CHATPAD_STORAGE_KEY").is_none() && option_env!("CHATPAD_PLACEHOLDER").is_none() {
        assert_eq!(load_config(), ChatConfig::default());
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn restore_outside_browser_starts_empty() {
    let store = MessageLogStore::new(BrowserStorage, load_config().storage_key);
    let state = ChatState::restore(&store);
    assert_eq!(state, ChatState::default());
}
