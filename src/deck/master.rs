//! The slide master: shared placeholders, color map and text styles.

use std::fmt::Write as FmtWrite;

use super::layout::write_prompt_body;
use super::opc::constants::namespace;
use super::shape::{
    PlaceholderSize, PlaceholderSpec, PlaceholderType, write_placeholder_head, write_sp_tree_start,
};
use crate::common::error::Result;
use crate::common::unit::pt_to_centipoints;

/// Id of the single slide master in `p:sldMasterIdLst`.
pub const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Master placeholders. Layouts without explicit geometry inherit from these.
pub fn master_placeholders() -> [PlaceholderSpec; 5] {
    use PlaceholderSize::{Half, Quarter};
    use PlaceholderType::*;

    [
        PlaceholderSpec::new(0, Title).at(457200, 274638, 8229600, 1143000),
        PlaceholderSpec::new(1, Body).at(457200, 1600200, 8229600, 4525963),
        PlaceholderSpec::new(2, Date)
            .with_size(Half)
            .at(457200, 6356350, 2133600, 365125),
        PlaceholderSpec::new(3, Footer)
            .with_size(Quarter)
            .at(3124200, 6356350, 2895600, 365125),
        PlaceholderSpec::new(4, SlideNumber)
            .with_size(Quarter)
            .at(6553200, 6356350, 2133600, 365125),
    ]
}

/// Body text levels: (left margin, hanging indent, font size in points, bullet).
const BODY_LEVELS: [(i64, i64, f64, &str); 9] = [
    (342900, -342900, 32.0, "•"),
    (742950, -285750, 28.0, "–"),
    (1143000, -228600, 24.0, "•"),
    (1600200, -228600, 20.0, "–"),
    (2057400, -228600, 20.0, "»"),
    (2514600, -228600, 20.0, "•"),
    (2971800, -228600, 20.0, "•"),
    (3429000, -228600, 20.0, "•"),
    (3886200, -228600, 20.0, "•"),
];

const TITLE_SIZE_PT: f64 = 44.0;
const OTHER_SIZE_PT: f64 = 18.0;

/// Serialize `slideMaster1.xml`.
///
/// `layout_r_ids` are the master's relationship ids of its layouts, in
/// layout order.
pub fn slide_master_xml(layout_r_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(8192);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;

    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    write_sp_tree_start(&mut xml);
    for (i, spec) in master_placeholders().iter().enumerate() {
        let shape_id = i as u32 + 2;
        let name = format!("{} {}", spec.ph_type.base_name(), shape_id - 1);
        write_placeholder_head(&mut xml, shape_id, &name, spec)?;
        write_prompt_body(&mut xml, spec.ph_type)?;
        xml.push_str("</p:sp>");
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");

    xml.push_str(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    );

    xml.push_str("<p:sldLayoutIdLst>");
    for (i, r_id) in layout_r_ids.iter().enumerate() {
        write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID + 1 + i as u32,
            r_id
        )?;
    }
    xml.push_str("</p:sldLayoutIdLst>");

    write_text_styles(&mut xml)?;
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

fn write_text_styles(xml: &mut String) -> Result<()> {
    xml.push_str("<p:txStyles>");

    xml.push_str("<p:titleStyle>");
    write!(
        xml,
        r#"<a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/><a:defRPr sz="{}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr>"#,
        pt_to_centipoints(TITLE_SIZE_PT)
    )?;
    xml.push_str("</p:titleStyle>");

    xml.push_str("<p:bodyStyle>");
    for (i, (mar_l, indent, size_pt, bullet)) in BODY_LEVELS.iter().enumerate() {
        let level = i + 1;
        write!(
            xml,
            r#"<a:lvl{level}pPr marL="{mar_l}" indent="{indent}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="{bullet}"/><a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{level}pPr>"#,
            size = pt_to_centipoints(*size_pt),
        )?;
    }
    xml.push_str("</p:bodyStyle>");

    xml.push_str("<p:otherStyle>");
    xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    for level in 1..=9 {
        write!(
            xml,
            r#"<a:lvl{level}pPr marL="{mar_l}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{level}pPr>"#,
            mar_l = 457200 * (level - 1),
            size = pt_to_centipoints(OTHER_SIZE_PT),
        )?;
    }
    xml.push_str("</p:otherStyle>");

    xml.push_str("</p:txStyles>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r_ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("rId{i}")).collect()
    }

    #[test]
    fn test_layout_id_list() {
        let xml = slide_master_xml(&r_ids(7)).unwrap();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483655" r:id="rId7"/>"#));
        assert_eq!(xml.matches("<p:sldLayoutId ").count(), 7);
    }

    #[test]
    fn test_text_styles() {
        let xml = slide_master_xml(&r_ids(1)).unwrap();
        assert!(xml.contains(r#"<a:defRPr sz="4400" kern="1200">"#));
        assert!(xml.contains(r#"<a:lvl9pPr marL="3886200""#));
        assert!(xml.contains(r#"<a:buChar char="–"/>"#));
        assert!(xml.contains("</p:txStyles></p:sldMaster>"));
    }

    #[test]
    fn test_master_placeholders() {
        let xml = slide_master_xml(&r_ids(1)).unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains(
            r#"<a:off x="457200" y="1600200"/><a:ext cx="8229600" cy="4525963"/>"#
        ));
    }
}
