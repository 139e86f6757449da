//! End-to-end coverage of the parsing API.

use shline::{Command, parse_script, split_command};

fn cmd(cmd: &str, args: &[&str]) -> Command {
    Command {
        cmd: cmd.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
    }
}

mod split {
    use super::*;

    #[test]
    fn test_plain_command() {
        assert_eq!(
            split_command("ls -la /home/user"),
            cmd("ls", &["-la", "/home/user"])
        );
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(
            split_command("echo \"Hello World\""),
            cmd("echo", &["Hello World"])
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(
            split_command("echo 'Hello World'"),
            cmd("echo", &["Hello World"])
        );
    }

    #[test]
    fn test_backslash_escaped_space() {
        assert_eq!(
            split_command("echo Hello\\ World"),
            cmd("echo", &["Hello World"])
        );
    }

    #[test]
    fn test_nested_quotes() {
        assert_eq!(
            split_command("echo \"Hello 'World'\""),
            cmd("echo", &["Hello 'World'"])
        );
    }

    #[test]
    fn test_mid_token_quotes_are_preserved() {
        assert_eq!(
            split_command("command --flag=\"internal quote\""),
            cmd("command", &["--flag=\"internal quote\""])
        );
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            split_command("echo \"Hello World"),
            cmd("echo", &["Hello World"])
        );
    }

    #[test]
    fn test_empty_quoted_args() {
        assert_eq!(split_command("echo \"\" ''"), cmd("echo", &["", ""]));
    }

    #[test]
    fn test_empty_string() {
        let command = split_command("");
        assert_eq!(command.cmd, "");
        assert!(command.args.is_empty());
    }

    #[test]
    fn test_token_count_matches_args() {
        let command = split_command("kubectl get pods -n kube-system");
        assert_ne!(command.cmd, "");
        assert_eq!(command.args.len(), 4);
    }
}

mod scripts {
    use super::*;

    #[test]
    fn test_multi_line_script() {
        let script = "cd /tmp\nls -la\necho done";
        let commands = parse_script(script);
        assert_eq!(
            commands,
            vec![
                cmd("cd", &["/tmp"]),
                cmd("ls", &["-la"]),
                cmd("echo", &["done"]),
            ]
        );
    }

    #[test]
    fn test_comments_and_blanks_contribute_nothing() {
        let script = "# header comment\n\necho hi # trailing\n\n# footer\n";
        assert_eq!(parse_script(script), vec![cmd("echo", &["hi"])]);
    }

    #[test]
    fn test_continuation_followed_by_comment_line() {
        let script = "helm upgrade console \\\n# the actual values come from the env";
        assert_eq!(parse_script(script), vec![cmd("helm", &["upgrade", "console"])]);
    }

    #[test]
    fn test_continuation_across_lines() {
        let script = "kubectl apply \\\n-f deploy.yaml";
        assert_eq!(
            parse_script(script),
            vec![cmd("kubectl", &["apply", "-f", "deploy.yaml"])]
        );
    }

    #[test]
    fn test_quoting_survives_line_handling() {
        let script = "echo 'one two'\necho \"three four\"";
        assert_eq!(
            parse_script(script),
            vec![cmd("echo", &["one two"]), cmd("echo", &["three four"])]
        );
    }
}

mod rejoin {
    use super::*;

    // Re-joining a simple command's tokens with spaces and re-splitting
    // reproduces the same tokens.
    #[test]
    fn test_simple_commands_resplit_identically() {
        for line in ["ls -la /home/user", "git status", "kubectl get pods"] {
            let first = split_command(line);
            let joined = first
                .tokens()
                .collect::<Vec<_>>()
                .join(" ");
            assert_eq!(split_command(&joined), first);
        }
    }

    #[test]
    fn test_rendered_commands_resplit_identically() {
        for line in [
            "echo \"Hello World\"",
            "echo '' \"\"",
            "run --it 'a b' c\\ d",
        ] {
            let first = split_command(line);
            assert_eq!(split_command(&first.to_string()), first);
        }
    }
}
