//! Discord reference parsing
//!
//! Pulls a server id and/or invite link out of pasted text.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::DiscordReference;

/// Bare snowflake-sized number. Any 17-20 digit run matches, real id or not.
/// Word boundaries are ASCII-only, so accented letters count as separators.
static RE_SERVER_ID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([0-9]{17,20})(?-u:\b)").ok());

/// Invite link on any of the known invite hosts; group 5 is the invite code.
/// Case folding is ASCII-only.
static RE_INVITE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)(https?://)?(www\.)?(discord\.(gg|io|me|li)|discordapp\.com/invite)/([a-zA-Z0-9-]{2,32})",
    )
    .ok()
});

/// Extract Discord server information from a message or invite link.
///
/// The server id and invite searches are independent; either, both or
/// neither may be present in the result.
pub fn extract_discord_info(message: &str) -> DiscordReference {
    let mut result = DiscordReference::default();

    if let Some(cap) = RE_SERVER_ID
        .as_ref()
        .and_then(|re| re.captures(message))
    {
        result.server_id = cap.get(1).map(|m| m.as_str().to_string());
    }

    if let Some(cap) = RE_INVITE.as_ref().and_then(|re| re.captures(message)) {
        result.invite_link = cap.get(0).map(|m| m.as_str().to_string());
        result.invite_code = cap.get(5).map(|m| m.as_str().to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        assert!(RE_SERVER_ID.is_some());
        assert!(RE_INVITE.is_some());
    }

    #[test]
    fn invite_link_only() {
        let info = extract_discord_info("join us! https://discord.gg/abc123");
        assert_eq!(info.server_id, None);
        assert_eq!(
            info.invite_link.as_deref(),
            Some("https://discord.gg/abc123")
        );
        assert_eq!(info.invite_code.as_deref(), Some("abc123"));
    }

    #[test]
    fn server_id_only() {
        let info = extract_discord_info("server id 123456789012345678");
        assert_eq!(info.server_id.as_deref(), Some("123456789012345678"));
        assert_eq!(info.invite_link, None);
        assert_eq!(info.invite_code, None);
    }

    #[test]
    fn nothing_found() {
        let info = extract_discord_info("no discord info here");
        assert_eq!(info, DiscordReference::default());
        assert!(info.is_empty());
    }

    #[test]
    fn both_server_id_and_invite() {
        let info = extract_discord_info(
            "guild 98765432109876543210 invite discordapp.com/invite/Bio-Lab",
        );
        assert_eq!(info.server_id.as_deref(), Some("98765432109876543210"));
        assert_eq!(
            info.invite_link.as_deref(),
            Some("discordapp.com/invite/Bio-Lab")
        );
        assert_eq!(info.invite_code.as_deref(), Some("Bio-Lab"));
    }

    #[test]
    fn server_id_length_bounds() {
        // 16 digits: too short
        assert_eq!(extract_discord_info("1234567890123456").server_id, None);
        // 17 digits: shortest accepted
        assert_eq!(
            extract_discord_info("12345678901234567").server_id.as_deref(),
            Some("12345678901234567")
        );
        // 21 digits: no 17-20 digit run is bounded on both sides
        assert_eq!(extract_discord_info("123456789012345678901").server_id, None);
    }

    #[test]
    fn server_id_needs_word_boundaries() {
        assert_eq!(
            extract_discord_info("id=x123456789012345678").server_id,
            None
        );
        assert_eq!(
            extract_discord_info("(123456789012345678)").server_id.as_deref(),
            Some("123456789012345678")
        );
    }

    #[test]
    fn non_ascii_letter_is_a_boundary() {
        assert_eq!(
            extract_discord_info("serveurID:é123456789012345678")
                .server_id
                .as_deref(),
            Some("123456789012345678")
        );
        assert_eq!(
            extract_discord_info("123456789012345678ñ").server_id.as_deref(),
            Some("123456789012345678")
        );
    }

    #[test]
    fn first_server_id_wins() {
        let info = extract_discord_info("11111111111111111 then 22222222222222222");
        assert_eq!(info.server_id.as_deref(), Some("11111111111111111"));
    }

    #[test]
    fn invite_hosts_and_case() {
        for (text, code) in [
            ("discord.io/science", "science"),
            ("http://www.discord.me/lab-42", "lab-42"),
            ("DISCORD.LI/AbC", "AbC"),
            ("https://discordapp.com/invite/xyz", "xyz"),
        ] {
            let info = extract_discord_info(text);
            assert_eq!(info.invite_code.as_deref(), Some(code), "text: {}", text);
            assert_eq!(info.invite_link.as_deref(), Some(text), "text: {}", text);
        }
    }

    #[test]
    fn invite_code_is_ascii_only() {
        // Kelvin sign and long s fold to ASCII letters under Unicode rules
        let info = extract_discord_info("discord.gg/\u{212A}\u{212A}");
        assert_eq!(info.invite_code, None);
        assert_eq!(info.invite_link, None);

        let info = extract_discord_info("discord.gg/ab\u{17F}");
        assert_eq!(info.invite_code.as_deref(), Some("ab"));
    }

    #[test]
    fn invite_code_length_bounds() {
        assert_eq!(extract_discord_info("discord.gg/a").invite_link, None);

        let long = format!("discord.gg/{}", "a".repeat(40));
        let info = extract_discord_info(&long);
        assert_eq!(info.invite_code.map(|c| c.len()), Some(32));
    }

    #[test]
    fn unknown_invite_host_ignored() {
        let info = extract_discord_info("https://discord.com/channels/abc");
        assert_eq!(info.invite_link, None);
    }

    #[test]
    fn invite_stops_at_punctuation() {
        let info = extract_discord_info("come hang out (discord.gg/biohack)!");
        assert_eq!(info.invite_link.as_deref(), Some("discord.gg/biohack"));
        assert_eq!(info.invite_code.as_deref(), Some("biohack"));
    }
}
