//! Gmsh MSH format version 2.2 (ASCII) support.
//!
//! The format is a sequence of tagged sections. Only the header is
//! mandatory on output; every other section is optional on input and is
//! written only when it has content.
//!
//! ```text
//! $MeshFormat
//! 2.2 0 8
//! $EndMeshFormat
//! $PhysicalNames
//! number-of-names
//! physical-dimension physical-tag "physical-name"
//! $EndPhysicalNames
//! $Nodes
//! number-of-nodes
//! node-number x-coord y-coord z-coord
//! $EndNodes
//! $Elements
//! number-of-elements
//! elm-number elm-type number-of-tags <tag> ... node-number-list
//! $EndElements
//! ```
//!
//! The count line after each start marker is skipped, not checked: every
//! line up to the end marker is read as a record.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{Element, ElementId, ElementKind, Mesh, Node, NodeId, PhysicalName};

const HEADER: &str = "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n";

/// Start and end markers of a section.
struct Section {
    start: &'static str,
    end: &'static str,
}

const PHYSICAL_NAMES: Section = Section {
    start: "$PhysicalNames",
    end: "$EndPhysicalNames",
};

const NODES: Section = Section {
    start: "$Nodes",
    end: "$EndNodes",
};

const ELEMENTS: Section = Section {
    start: "$Elements",
    end: "$EndElements",
};

/// Decode MSH 2.2 text into a mesh.
///
/// Fails with [`MeshError::Format`] if a section marker is unmatched or out
/// of order, a record has the wrong number of fields, a number does not
/// parse, or an element declares more tags than it has fields. No partial
/// mesh is returned.
///
/// # Example
///
/// ```
/// use mshkit::io::msh;
///
/// let text = "$Nodes\n2\n1 0 0 0\n2 1 0 0\n$EndNodes\n\
///             $Elements\n1\n1 1 2 0 1 1 2\n$EndElements\n";
/// let mesh = msh::decode(text).unwrap();
/// assert_eq!(mesh.num_nodes(), 2);
/// assert_eq!(mesh.elements[0].tags, vec![0, 1]);
/// ```
pub fn decode(text: &str) -> Result<Mesh> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut mesh = Mesh::new();

    for line in section_body(&lines, &PHYSICAL_NAMES)? {
        mesh.physical_names.push(parse_physical_name(line)?);
    }

    for line in section_body(&lines, &NODES)? {
        mesh.nodes.push(parse_node(line)?);
    }

    for line in section_body(&lines, &ELEMENTS)? {
        mesh.elements.push(parse_element(line)?);
    }

    Ok(mesh)
}

/// Encode a mesh as MSH 2.2 text.
///
/// Coordinates are written with six decimals, so decoding and re-encoding the
/// output reproduces it exactly.
///
/// # Example
///
/// ```
/// use mshkit::io::msh;
/// use mshkit::mesh::{Mesh, Node};
///
/// let mut mesh = Mesh::new();
/// mesh.nodes.push(Node::from_coords(1, 0.5, 0.0, -1.0));
/// assert_eq!(
///     msh::encode(&mesh),
///     "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n$Nodes\n1\n1 0.500000 0.000000 -1.000000\n$EndNodes\n"
/// );
/// ```
pub fn encode(mesh: &Mesh) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_mesh(&mut out, mesh);
    out
}

/// Load a mesh from an MSH file.
///
/// # Example
///
/// ```no_run
/// use mshkit::io::msh;
///
/// let mesh = msh::load("model.msh").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let text = std::fs::read_to_string(path)?;
    decode(&text)
}

/// Save a mesh to an MSH file.
///
/// # Example
///
/// ```no_run
/// use mshkit::io::msh;
/// use mshkit::mesh::Mesh;
///
/// let mesh = Mesh::new();
/// msh::save(&mesh, "output.msh").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", mesh)?;
    writer.flush()?;
    Ok(())
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_mesh(f, self)
    }
}

impl FromStr for Mesh {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

fn write_mesh<W: fmt::Write>(w: &mut W, mesh: &Mesh) -> fmt::Result {
    w.write_str(HEADER)?;

    if !mesh.physical_names.is_empty() {
        writeln!(w, "{}", PHYSICAL_NAMES.start)?;
        writeln!(w, "{}", mesh.physical_names.len())?;
        for pn in &mesh.physical_names {
            writeln!(w, "{} {} \"{}\"", pn.dimension, pn.tag, pn.name)?;
        }
        writeln!(w, "{}", PHYSICAL_NAMES.end)?;
    }

    if !mesh.nodes.is_empty() {
        writeln!(w, "{}", NODES.start)?;
        writeln!(w, "{}", mesh.nodes.len())?;
        for n in &mesh.nodes {
            let p = &n.position;
            writeln!(w, "{} {:.6} {:.6} {:.6}", n.id, p.x, p.y, p.z)?;
        }
        writeln!(w, "{}", NODES.end)?;
    }

    if !mesh.elements.is_empty() {
        writeln!(w, "{}", ELEMENTS.start)?;
        writeln!(w, "{}", mesh.elements.len())?;
        for el in &mesh.elements {
            write!(w, "{} {} {}", el.id, el.kind.code(), el.tags.len())?;
            for tag in &el.tags {
                write!(w, " {}", tag)?;
            }
            for id in &el.node_ids {
                write!(w, " {}", id)?;
            }
            w.write_char('\n')?;
        }
        writeln!(w, "{}", ELEMENTS.end)?;
    }

    Ok(())
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim().chars().filter(|&c| c != '\r').eq(marker.chars())
}

/// Lines between a section's count line and its end marker.
///
/// An absent section yields no lines.
fn section_body<'a, 'b>(lines: &'b [&'a str], section: &Section) -> Result<&'b [&'a str]> {
    let start = lines.iter().position(|l| is_marker(l, section.start));
    let end = lines.iter().position(|l| is_marker(l, section.end));

    match (start, end) {
        (None, None) => Ok(&[]),
        (Some(_), None) => Err(MeshError::format(
            section.start,
            format!("missing {} marker", section.end),
        )),
        (None, Some(_)) => Err(MeshError::format(
            section.end,
            format!("missing {} marker", section.start),
        )),
        (Some(start), Some(end)) if end < start => Err(MeshError::format(
            section.end,
            format!("{} appears before {}", section.end, section.start),
        )),
        (Some(start), Some(end)) if end == start + 1 => Err(MeshError::format(
            section.start,
            "missing count line",
        )),
        (Some(start), Some(end)) => Ok(&lines[start + 2..end]),
    }
}

fn parse_int(field: &str, line: &str, what: &str) -> Result<i64> {
    field
        .parse::<i64>()
        .map_err(|e| MeshError::format(line, format!("invalid {} {:?}: {}", what, field, e)))
}

fn parse_float(field: &str, line: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .map_err(|e| MeshError::format(line, format!("invalid coordinate {:?}: {}", field, e)))
}

fn expect_fields<'a>(line: &'a str, count: usize, record: &str) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != count {
        return Err(MeshError::format(
            line,
            format!("{} record needs {} fields, found {}", record, count, fields.len()),
        ));
    }
    Ok(fields)
}

/// Strip the first and last character of a quoted token.
fn strip_quotes(token: &str) -> Option<&str> {
    let mut chars = token.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    Some(&token[first.len_utf8()..token.len() - last.len_utf8()])
}

fn parse_physical_name(line: &str) -> Result<PhysicalName> {
    let fields = expect_fields(line, 3, "physical name")?;
    let dimension = parse_int(fields[0], line, "dimension")?;
    let tag = parse_int(fields[1], line, "tag")?;
    let name = strip_quotes(fields[2])
        .ok_or_else(|| MeshError::format(line, "physical name is not quoted"))?;
    Ok(PhysicalName::new(dimension, tag, name))
}

fn parse_node(line: &str) -> Result<Node> {
    let fields = expect_fields(line, 4, "node")?;
    let id = parse_int(fields[0], line, "node id")?;
    let x = parse_float(fields[1], line)?;
    let y = parse_float(fields[2], line)?;
    let z = parse_float(fields[3], line)?;
    Ok(Node::new(NodeId::new(id), Point3::new(x, y, z)))
}

fn parse_element(line: &str) -> Result<Element> {
    let values = line
        .split_whitespace()
        .map(|field| parse_int(field, line, "element field"))
        .collect::<Result<Vec<i64>>>()?;

    if values.len() < 3 {
        return Err(MeshError::format(
            line,
            format!("element record needs at least 3 fields, found {}", values.len()),
        ));
    }

    let num_tags = values[2];
    let available = values.len() - 3;
    let num_tags = usize::try_from(num_tags)
        .ok()
        .filter(|&n| n <= available)
        .ok_or_else(|| {
            MeshError::format(
                line,
                format!("element declares {} tags but only {} fields follow", num_tags, available),
            )
        })?;

    let (tags, nodes) = values[3..].split_at(num_tags);
    Ok(Element::new(
        ElementId::new(values[0]),
        ElementKind::from_code(values[1]),
        tags.to_vec(),
        nodes.iter().copied().map(NodeId::new).collect(),
    ))
}
