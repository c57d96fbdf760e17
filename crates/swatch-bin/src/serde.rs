use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use swatch_image::swatch_png::PngInfo;

/// Image metadata as printed by `--probe`
pub struct Metadata<'a>
{
    source: &'a str,
    info:   PngInfo
}

impl<'a> Metadata<'a>
{
    pub fn new(source: &'a str, info: PngInfo) -> Metadata<'a>
    {
        Metadata { source, info }
    }
}

impl<'a> Serialize for Metadata<'a>
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 7)?;

        state.serialize_field("source", self.source)?;
        state.serialize_field("width", &self.info.width)?;
        state.serialize_field("height", &self.info.height)?;
        state.serialize_field("depth", &self.info.depth)?;
        state.serialize_field("color", &self.info.color.to_int())?;
        state.serialize_field("channels", &self.info.components())?;
        state.serialize_field("interlaced", &self.info.interlaced)?;

        state.end()
    }
}

#[cfg(test)]
mod tests
{
    use swatch_image::swatch_png::{PngColor, PngInfo};

    use super::Metadata;

    #[test]
    fn serializes_header_fields()
    {
        let info = PngInfo {
            width:      3,
            height:     2,
            depth:      8,
            color:      PngColor::RGB,
            interlaced: false
        };
        let value = serde_json::to_value(Metadata::new("a.png", info)).unwrap();

        assert_eq!(value["source"], "a.png");
        assert_eq!(value["width"], 3);
        assert_eq!(value["height"], 2);
        assert_eq!(value["color"], 2);
        assert_eq!(value["channels"], 3);
        assert_eq!(value["interlaced"], false);
    }
}
