//! An example to decompose a URI given as the CLI argument.

use uri_grammar::HostKind;

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URI

FLAGS:
    -h, --help      Prints this help

ARGS:
    <URI>           URI (RFC 3986)
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URI.
    uri: String,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut uri = None;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--" => break,
                "--help" | "-h" => help_and_exit(),
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if uri.replace(arg).is_some() {
                        die("URI can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if uri.replace(arg).is_some() {
                die("URI can be specified at most once");
            }
        }

        let uri = uri.unwrap_or_else(|| die("URI should be specified"));
        Self { uri }
    }
}

fn main() {
    let opt = CliOpt::parse();
    let raw = opt.uri.as_str();
    let parts = match uri_grammar::parse(raw) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", raw, e)),
    };
    println!("Successfully parsed: {:?}", raw);

    println!("scheme:    {:?}", parts.scheme());
    if parts.has_authority() {
        if parts.has_user_info() {
            println!("userinfo:  {:?}", parts.user_info());
        }
        let kind = match parts.host_kind() {
            Some(HostKind::IpLiteral(kind)) => format!("IP-literal ({:?})", kind),
            Some(HostKind::Ipv4) => "IPv4address".to_owned(),
            Some(HostKind::RegName) | None => "reg-name".to_owned(),
        };
        println!("host:      {:?} [{}]", parts.host(), kind);
        if parts.has_port() {
            println!("port:      {:?}", parts.port());
        }
    } else {
        println!("URI has no authority.");
    }
    println!("path:      {:?}", parts.path());
    if parts.has_query() {
        println!("query:     {:?}", parts.query());
    }
    if parts.has_fragment() {
        println!("fragment:  {:?}", parts.fragment());
    } else {
        println!("URI has no fragment.");
    }
}
