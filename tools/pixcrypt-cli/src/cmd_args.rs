use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn codec_args() -> [Arg; 4] {
    [
        Arg::new("key")
            .short('k')
            .long("key")
            .help("Shift/XOR key; values outside 0-255 are reduced modulo 256")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true),
        Arg::new("mode")
            .short('m')
            .long("mode")
            .help("Channel transform")
            .value_parser(PossibleValuesParser::new(["shift", "xor", "invert"])),
        Arg::new("out-dir")
            .short('d')
            .long("out-dir")
            .help("Directory receiving the output images")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("serial")
            .long("serial")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Transform on a single thread"),
    ]
}

fn output_name_arg(default: &'static str) -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .help("File name of the written image inside the output directory")
        .long_help(format!("File name of the written image inside the output directory [default: {default}]"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixcrypt")
        .about("Reversible per-pixel image scrambling")
        .version(pixcrypt::VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("encrypt")
            .about("Encrypt an image into encrypted_image.png")
            .arg(input_arg("Image to encrypt (PNG, JPEG or BMP)"))
            .args(codec_args())
            .arg(output_name_arg("encrypted_image.png"))
            .arg(Arg::new("package")
                .short('p')
                .long("package")
                .help("Also write a .pxc package holding the encrypted pixels and mode")
                .value_parser(value_parser!(PathBuf))))
        .subcommand(Command::new("decrypt")
            .about("Decrypt an encrypted PNG or .pxc package into decrypted_image.png")
            .arg(input_arg("Encrypted PNG or .pxc package"))
            .args(codec_args())
            .arg(output_name_arg("decrypted_image.png")))
        .subcommand(Command::new("roundtrip")
            .about("Encrypt, decrypt and check that the original pixels come back")
            .arg(input_arg("Image to test"))
            .args(codec_args()))
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .global(true)
            .help("JSON session configuration")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about each step"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn test_negative_key_parses() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pixcrypt", "encrypt", "in.png", "--key", "-1", "--mode", "xor"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "encrypt");
        assert_eq!(sub.get_one::<i64>("key"), Some(&-1));
        assert_eq!(sub.get_one::<String>("mode").map(String::as_str), Some("xor"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = create_cmd_args().try_get_matches_from(["pixcrypt", "decrypt", "in.png", "-m", "shuffle"]);
        assert!(result.is_err());
    }
}
