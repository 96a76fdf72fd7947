use clap::{Arg, ArgAction, Command};

pub fn arg_parser_repl() -> Command {
    Command::new("openshelf")
        .about("Search and browse the Open Library catalog")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("search")
                .about("Search for books (prompts for terms when none are given)")
                .arg(Arg::new("title").long("title").short('t'))
                .arg(Arg::new("author").long("author").short('a'))
                .arg(Arg::new("subject").long("subject").short('s')),
        )
        .subcommand(Command::new("results").about("Show the current page of results again"))
        .subcommand(
            Command::new("page")
                .about("Jump to a page of the current results")
                .arg(Arg::new("number").required(true)),
        )
        .subcommand(Command::new("next").about("Go to the next page of results"))
        .subcommand(Command::new("prev").about("Go to the previous page of results"))
        .subcommand(
            Command::new("show")
                .about("Show the details of a book")
                .arg(Arg::new("id").required(true))
                .arg(
                    Arg::new("full")
                        .long("full")
                        .action(ArgAction::SetTrue)
                        .help("Print the whole description instead of a preview"),
                ),
        )
        .subcommand(
            Command::new("editions")
                .about("List the editions of a book")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("page").long("page").short('p')),
        )
        .subcommand(Command::new("config").about("Print the default configuration"))
        .subcommand(Command::new("exit").about("Exit"))
}

pub fn arg_parser_cli() -> Command {
    arg_parser_repl().subcommand(Command::new("repl").about("Launch a read eval print loop"))
}

pub fn generate_completions() -> Vec<String> {
    let cmd = arg_parser_repl();
    fn add_command(parent_fn_name: &str, cmd: &Command, subcmds: &mut Vec<String>) {
        let fn_name = format!(
            "{parent_fn_name} {cmd_name}",
            parent_fn_name = parent_fn_name,
            cmd_name = cmd.get_name().to_string()
        )
        .trim()
        .to_string();
        subcmds.push(fn_name.clone());
        for subcmd in cmd.get_subcommands() {
            add_command(&fn_name, subcmd, subcmds);
        }
    }
    let mut subcmds = vec![];
    for subcmd in cmd.get_subcommands() {
        add_command(&"", subcmd, &mut subcmds);
    }
    subcmds.sort();
    subcmds
}
