use crate::model::Product;

/// Helper function to create a seed product
#[allow(clippy::too_many_arguments)]
fn seed_product(
    id: &str,
    title: &str,
    description: &str,
    price: u32,
    original_price: Option<u32>,
    image: &str,
    category: &str,
    seller: &str,
    rating: u8,
    reviews: u32,
    sustainable: bool,
    featured: bool,
) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        original_price,
        image: image.to_string(),
        category: category.to_string(),
        seller: seller.to_string(),
        rating,
        reviews,
        sustainable,
        featured,
    }
}

/// The canonical catalog every fresh session starts from
pub fn initial_products() -> Vec<Product> {
    vec![
        seed_product(
            "1",
            "Handwoven Boho Necklace",
            "Beautiful handcrafted necklace made with sustainable materials and traditional techniques.",
            1299,
            Some(1599),
            "https://5.imimg.com/data5/ECOM/Default/2024/5/422451569/HT/JL/KS/43052074/img-2845-500x500.jpg",
            "Jewelry",
            "Artisan Maya",
            5,
            23,
            true,
            true,
        ),
        seed_product(
            "2",
            "Watercolor Landscape Painting",
            "Original watercolor painting depicting serene mountain landscapes with vibrant colors.",
            2500,
            None,
            "https://previews.123rf.com/images/mindsparx/mindsparx2303/mindsparx230378671/201024677-watercolor-landscape-with-lake-trees-and-sunset-digital-painting.jpg",
            "Paintings",
            "Artist Priya",
            4,
            15,
            true,
            true,
        ),
        seed_product(
            "3",
            "Ceramic Planters Set",
            "Set of 3 handmade ceramic planters perfect for succulents and small plants.",
            899,
            Some(1199),
            "https://www.orangeskies.in/cdn/shop/files/IMG_1787.jpg?v=1716549473&width=1445",
            "Home Décor",
            "Potter Raj",
            5,
            31,
            true,
            false,
        ),
        seed_product(
            "4",
            "Embroidered Wall Hanging",
            "Traditional embroidered wall art featuring intricate patterns and vibrant threads.",
            1599,
            None,
            "https://shop.gaatha.com/image/catalog/Saath/29-chakla-embroidared-(1).jpg",
            "Crafts",
            "Craftsman Arjun",
            4,
            8,
            false,
            true,
        ),
        seed_product(
            "5",
            "Silver Bracelet with Stones",
            "Elegant silver bracelet adorned with natural semi-precious stones.",
            2199,
            None,
            "https://www.silberuh.com/cdn/shop/files/TurquoiseSilverBracelet1_1200x1200.jpg?v=1684398639",
            "Jewelry",
            "Jeweler Kavya",
            5,
            42,
            true,
            false,
        ),
        seed_product(
            "6",
            "Abstract Canvas Art",
            "Modern abstract painting on canvas with bold colors and dynamic brushstrokes.",
            3200,
            None,
            "https://muselot.in/cdn/shop/files/Ocean_and_fire_abstract_canvas_fabric_muselot_2048x.jpg?v=1725177063",
            "Paintings",
            "Artist Neha",
            4,
            19,
            false,
            true,
        ),
        seed_product(
            "7",
            "Macrame Table Runner",
            "Beautifully crafted macrame table runner made from organic cotton rope.",
            799,
            Some(999),
            "https://loomsmith.com/cdn/shop/products/loomsmith-macrame-table-runner-natural.png?v=1655967804",
            "Home Décor",
            "Designer Meera",
            5,
            27,
            true,
            false,
        ),
        seed_product(
            "8",
            "Wooden Carved Elephant",
            "Hand-carved wooden elephant sculpture with intricate details and natural finish.",
            1399,
            None,
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQeqwitjymkXfbSsuLIl1PHqe7CWHTeFwlmaw&s",
            "Crafts",
            "Woodcarver Sam",
            4,
            12,
            true,
            true,
        ),
    ]
}
