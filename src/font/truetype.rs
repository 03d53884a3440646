use crate::font::GlyphMetrics;
use crate::refs::{ObjectReferences, RefType};
use crate::{PDFError, Pt};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::fmt;

/// A parsed TrueType / OpenType font. The whole face is embedded in the
/// generated PDF, so large fonts noticeably increase the output size.
pub struct TrueTypeFont {
    face: OwnedFace,
}

impl fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("name", &self.name())
            .field("bytes", &self.face.as_slice().len())
            .finish()
    }
}

/// One embeddable glyph: the character it was reached from, its advance and
/// its height, in font units
#[derive(Debug, Copy, Clone)]
struct GlyphEntry {
    ch: char,
    advance: u16,
    height: i16,
}

impl TrueTypeFont {
    /// Parse a font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TrueTypeFont { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    fn name_record(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if it carries one
    pub fn name(&self) -> Option<String> {
        self.name_record(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if it carries one
    pub fn family(&self) -> Option<String> {
        self.name_record(owned_ttf_parser::name_id::FAMILY)
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().ascender() as f32
    }

    /// Distance from the baseline to the bottom of the font; usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().descender() as f32
    }

    /// Glyph used to draw a character, falling back to the replacement
    /// character, then `?`, then `.notdef`
    pub fn glyph_id(&self, ch: char) -> u16 {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .map(|gid| gid.0)
            .unwrap_or(0)
    }

    /// Every glyph reachable through a unicode cmap subtable, keyed by glyph id
    fn glyph_table(&self) -> BTreeMap<u16, GlyphEntry> {
        let face = self.face();
        let mut table: BTreeMap<u16, GlyphEntry> = BTreeMap::new();
        let Some(cmap) = face.tables().cmap else {
            return table;
        };

        for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
            subtable.codepoints(|codepoint| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) else {
                    return;
                };
                if table.contains_key(&gid.0) {
                    return;
                }
                let Some(advance) = face.glyph_hor_advance(gid) else {
                    return;
                };
                let height = face
                    .glyph_bounding_box(gid)
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                table.insert(gid.0, GlyphEntry { ch, advance, height });
            });
        }

        table
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let glyphs = self.glyph_table();
        if glyphs.is_empty() {
            return Err(PDFError::MissingGlyphs);
        }

        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
        font.finish();

        Ok(())
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, GlyphEntry>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, glyphs, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);

        // runs of consecutive glyph ids share one widths entry
        let mut widths = cid_font.widths();
        let mut run_start: Option<u16> = None;
        let mut run: Vec<f32> = Vec::new();
        for (&gid, glyph) in glyphs.iter() {
            match run_start {
                Some(start) if start as usize + run.len() == gid as usize => {}
                Some(start) => {
                    widths.consecutive(start, run.drain(..));
                    run_start = Some(gid);
                }
                None => run_start = Some(gid),
            }
            run.push(glyph.advance as f32 * scaling);
        }
        if let Some(start) = run_start {
            widths.consecutive(start, run);
        }
        widths.finish();

        // the average advance stands in for anything not listed above
        let total: u32 = glyphs.values().map(|g| g.advance as u32).sum();
        let default_width = total as f32 / glyphs.len() as f32 * scaling;
        cid_font.default_width(default_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, GlyphEntry>,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        let data = self.face.as_slice();
        writer
            .stream(data_id, data)
            .pair(Name(b"Length1"), data.len() as i32);

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        let max_width = glyphs.values().map(|g| g.advance).max().unwrap_or_default();
        let max_height = glyphs.values().map(|g| g.height).max().unwrap_or_default();
        let total_width: u32 = glyphs.values().map(|g| g.advance as u32).sum();
        let avg_width = total_width as f32 / glyphs.len() as f32;

        let name = self.name().unwrap_or_else(|| format!("F{font_index}"));
        let family = self.family().unwrap_or_else(|| name.clone());

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::SYMBOLIC;
        flags.set(FontFlags::FIXED_PITCH, face.is_monospaced());
        flags.set(FontFlags::ITALIC, face.is_italic());
        descriptor.flags(flags);

        let global = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: global.x_min as f32 * scaling,
            y1: global.y_min as f32 * scaling,
            x2: global.x_max as f32 * scaling,
            y2: (global.y_max.max(max_height)) as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().unwrap_or(face.ascender());
        descriptor.cap_height(cap_height as f32 * scaling);
        descriptor.x_height(face.x_height().unwrap_or(cap_height) as f32 * scaling);
        // TODO: derive the stem width from the OS/2 weight class instead of a constant
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(avg_width * scaling);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, GlyphEntry>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries and may not cross a high byte
        let entries: Vec<(u16, char)> = glyphs.iter().map(|(&gid, g)| (gid, g.ch)).collect();
        for block in entries.chunk_by(|a, b| a.0 >> 8 == b.0 >> 8) {
            for chunk in block.chunks(100) {
                cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
                for &(gid, ch) in chunk {
                    let mut utf16 = [0u16; 2];
                    let hex: String = ch
                        .encode_utf16(&mut utf16)
                        .iter()
                        .map(|unit| format!("{unit:04x}"))
                        .collect();
                    cmap.push_str(&format!("<{gid:04x}> <{hex}>\n"));
                }
                cmap.push_str("endbfchar\n");
            }
        }
        cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

impl GlyphMetrics for TrueTypeFont {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| {
                scaling
                    * self
                        .face()
                        .glyph_hor_advance(GlyphId(self.glyph_id(ch)))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}
