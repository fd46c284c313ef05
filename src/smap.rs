//! Source maps for the `SourceDebugExtension` attribute
//!
//! The format is the SMAP text format of [JSR-45][0]: a header naming the generated file and the
//! default stratum, one section per stratum (its files and its line mappings), an optional vendor
//! section, and a final `*E`.
//!
//! ```text
//! SMAP
//! Foo.java
//! Clojure
//! *S Clojure
//! *F
//! + 1 foo
//! src/foo.clj
//! *L
//! 10:20
//! *E
//! ```
//!
//! [0]: https://jcp.org/en/jsr/detail?id=45

/// One stratum (eg. the source language) and how its lines map onto the generated file
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Stratum {
    pub stratum: String,

    /// Files are numbered from 1, in this order
    pub source_files: Vec<SourceFile>,
    pub lines: Vec<LineInfo>,
}

/// Source file entry in a stratum
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SourceFile {
    pub source_name: String,

    /// When present, the entry is written in its two line (`+`) form
    pub source_path: Option<String>,
}

impl SourceFile {
    pub fn new(source_name: impl Into<String>, source_path: Option<&str>) -> SourceFile {
        SourceFile {
            source_name: source_name.into(),
            source_path: source_path.map(str::to_owned),
        }
    }
}

/// Line mapping entry
///
/// Maps `repeat_count` input lines starting at `input_start_line` onto output lines starting at
/// `output_start_line`, each input line covering `output_line_increment` output lines.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LineInfo {
    pub input_start_line: u32,

    /// File (from [`Stratum::source_files`]) the input lines are in
    pub line_file_id: Option<u32>,
    pub repeat_count: Option<u32>,
    pub output_start_line: u32,
    pub output_line_increment: Option<u32>,
}

impl LineInfo {
    /// Map a single input line onto a single output line
    pub fn new(input_start_line: u32, output_start_line: u32) -> LineInfo {
        LineInfo {
            input_start_line,
            line_file_id: None,
            repeat_count: None,
            output_start_line,
            output_line_increment: None,
        }
    }
}

/// Vendor specific section
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Vendor {
    pub vendor_id: String,
    pub content: String,
}

/// Encode an SMAP
///
/// `source_file` is the name of the generated file, without its `.java` extension. Lines are
/// separated with `\n` and there is no newline after the final `*E`.
pub fn encode_smap(
    source_file: &str,
    default_stratum: &str,
    strata: &[Stratum],
    vendor: Option<&Vendor>,
) -> String {
    let mut lines: Vec<String> = vec![
        String::from("SMAP"),
        format!("{}.java", source_file),
        default_stratum.to_owned(),
    ];

    for stratum in strata {
        lines.push(format!("*S {}", stratum.stratum));

        lines.push(String::from("*F"));
        for (idx, file) in stratum.source_files.iter().enumerate() {
            let file_index = idx + 1;
            match &file.source_path {
                Some(path) => {
                    lines.push(format!("+ {} {}", file_index, file.source_name));
                    lines.push(path.clone());
                }
                None => lines.push(format!("{} {}", file_index, file.source_name)),
            }
        }

        lines.push(String::from("*L"));
        lines.extend(stratum.lines.iter().map(encode_line_info));
    }

    if let Some(vendor) = vendor {
        lines.push(String::from("*V"));
        lines.push(vendor.vendor_id.clone());
        lines.push(vendor.content.clone());
    }

    lines.push(String::from("*E"));
    lines.join("\n")
}

/// `InputStartLine[#LineFileID][,RepeatCount]:OutputStartLine[,OutputLineIncrement]`
fn encode_line_info(line: &LineInfo) -> String {
    let mut encoded = line.input_start_line.to_string();
    if let Some(file_id) = line.line_file_id {
        encoded.push_str(&format!("#{}", file_id));
    }
    if let Some(repeat_count) = line.repeat_count {
        encoded.push_str(&format!(",{}", repeat_count));
    }
    encoded.push_str(&format!(":{}", line.output_start_line));
    if let Some(increment) = line.output_line_increment {
        encoded.push_str(&format!(",{}", increment));
    }
    encoded
}
