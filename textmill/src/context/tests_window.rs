#[cfg(test)]
mod tests {
    use crate::context::window::ContextWindow;

    #[test]
    fn test_limit_reserves_chunk_headroom() {
        let window = ContextWindow::new(10, 3);
        assert_eq!(window.limit(), 6);
    }

    #[test]
    fn test_seed_keeps_most_recent_tokens() {
        let mut window = ContextWindow::new(10, 3);
        window.seed(&[1, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(window.tokens(), &[3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_short_seed_is_kept_verbatim() {
        let mut window = ContextWindow::new(64, 1);
        window.seed(&[10, 20, 30]);

        assert_eq!(window.tokens(), &[10, 20, 30]);
    }

    #[test]
    fn test_extend_evicts_from_the_front_in_order() {
        let mut window = ContextWindow::new(10, 3);
        window.seed(&[1, 2, 3, 4]);
        window.extend(&[5, 6, 7, 8, 9]);

        assert_eq!(window.len(), 6);
        assert_eq!(window.tokens(), &[4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_length_stays_bounded_across_many_appends() {
        let mut window = ContextWindow::new(16, 4);
        let mut next_token = 0u64;
        for _ in 0..50 {
            let chunk: Vec<u64> = (0..4)
                .map(|_| {
                    next_token += 1;
                    next_token
                })
                .collect();
            window.extend(&chunk);
            assert!(window.len() <= window.limit());
        }

        let tokens = window.tokens();
        assert_eq!(tokens.last(), Some(&next_token));
        let expected_first = next_token - window.len() as u64 + 1;
        assert_eq!(tokens.first(), Some(&expected_first));
    }

    #[test]
    fn test_chunk_filling_the_window_leaves_no_room() {
        let mut window = ContextWindow::new(5, 5);
        window.seed(&[1, 2, 3]);

        assert_eq!(window.limit(), 0);
        assert!(window.is_empty());
    }

    #[test]
    fn test_reseed_replaces_previous_conversation() {
        let mut window = ContextWindow::new(10, 1);
        window.seed(&[1, 2, 3]);
        window.extend(&[4]);
        window.seed(&[9, 9]);

        assert_eq!(window.tokens(), &[9, 9]);
    }
}
