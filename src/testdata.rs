//! Shared fixtures for unit tests.

/// Output of the generator for a 5x10 rectangle with one surface.
pub const SAMPLE: &str = "$MeshFormat
2.2 0 8
$EndMeshFormat
$PhysicalNames
7
0 1 \"NODE002\"
0 5 \"NODE003\"
0 6 \"NODE001\"
1 2 \"LINE001\"
1 3 \"LINE002\"
1 4 \"LINE003\"
2 7 \"PLANE006\"
$EndPhysicalNames
$Nodes
5
1 0 0 0
2 5 0 0
3 0 10 0
4 5 10 0
5 2.5 5 0
$EndNodes
$Elements
10
1 15 2 6 1 2
2 15 2 1 2 3
3 15 2 5 3 4
4 1 2 2 1 2 4
5 1 2 3 2 1 3
6 1 2 4 3 1 2
7 2 2 7 6 1 2 5
8 2 2 7 6 4 3 5
9 2 2 7 6 2 4 5
10 2 2 7 6 3 1 5
$EndElements
";
